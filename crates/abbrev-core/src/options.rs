//! Configuration options for markup rendering

/// Options for rendering a node forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Indentation unit, prefixed once per nesting level to each line
    pub indent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

impl Options {
    /// Create options with a custom indentation unit
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }
}
