//! Expander - the main entry point for abbreviation expansion.

use tracing::debug;

use abbrev_core::{render, Node, Options, DEFAULT_TAG};

use crate::parser::Parser;
use crate::Result;

/// Default upper bound for a single `*n` repeat count
pub const DEFAULT_MAX_REPEAT: usize = 10_000;

/// Default upper bound for the size of any expanded subtree
pub const DEFAULT_MAX_NODES: usize = 100_000;

/// Default upper bound for nesting through `(` and `>` combined
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for the Expander
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Tag used when an element omits one
    pub default_tag: String,

    /// Largest accepted repeat count
    pub max_repeat: usize,

    /// Largest number of nodes a repeated or nested subtree may expand to
    pub max_nodes: usize,

    /// Largest number of open groups and child levels at any point
    pub max_depth: usize,

    /// Indentation unit for rendering
    pub indent: String,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            max_repeat: DEFAULT_MAX_REPEAT,
            max_nodes: DEFAULT_MAX_NODES,
            max_depth: DEFAULT_MAX_DEPTH,
            indent: Options::default().indent,
        }
    }
}

impl ExpandOptions {
    /// The subset of options used by the renderer
    pub fn render_options(&self) -> Options {
        Options::with_indent(self.indent.clone())
    }
}

/// Result of a successful expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Rendered markup
    pub html: String,

    /// The parsed forest the markup was rendered from
    pub nodes: Vec<Node>,
}

/// The main service for expanding abbreviations
#[derive(Debug, Clone, Default)]
pub struct Expander {
    options: ExpandOptions,
}

impl Expander {
    /// Create a new Expander with default options
    pub fn new() -> Self {
        Self {
            options: ExpandOptions::default(),
        }
    }

    /// Create an Expander with custom options
    pub fn with_options(options: ExpandOptions) -> Self {
        Self { options }
    }

    /// Parse and render an abbreviation
    pub fn expand(&self, abbreviation: &str) -> Result<Expansion> {
        let nodes = self.parse(abbreviation).map_err(|e| {
            debug!(target: "abbrev", error = %e, "abbreviation rejected");
            e
        })?;
        let html = self.render(&nodes);

        debug!(
            target: "abbrev",
            input_len = abbreviation.len(),
            roots = nodes.len(),
            output_len = html.len(),
            "expanded abbreviation"
        );

        Ok(Expansion { html, nodes })
    }

    /// Parse an abbreviation without rendering it
    pub fn parse(&self, abbreviation: &str) -> Result<Vec<Node>> {
        Parser::with_options(abbreviation, &self.options).parse()
    }

    /// Render an already parsed forest
    pub fn render(&self, nodes: &[Node]) -> String {
        render(nodes, &self.options.render_options())
    }

    /// Get the current options
    pub fn options(&self) -> &ExpandOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ExpandOptions {
        &mut self.options
    }
}

/// Expand an abbreviation with default options
pub fn expand(abbreviation: &str) -> Result<Expansion> {
    Expander::new().expand(abbreviation)
}
