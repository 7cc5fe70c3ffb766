//! # abbrev
//!
//! Expand CSS-selector-like abbreviations into indented markup.
//!
//! An abbreviation describes a tree of elements in one line:
//!
//! - `div#main.wide` - tag, id and classes
//! - `a[href=/ title="Home"]` - attributes, `[disabled]` for flags
//! - `p{Hello}` - text content
//! - `ul>li` - child nesting, `h1+p` - siblings, `(a+b)` - grouping
//! - `li.item$*3` - repetition, `$` runs are replaced by the 1-based index
//!
//! ## Example
//!
//! ```rust
//! let expansion = abbrev::expand("ul>li.item$*2").unwrap();
//! assert_eq!(
//!     expansion.html,
//!     "<ul>\n  <li class=\"item1\"></li>\n  <li class=\"item2\"></li>\n</ul>"
//! );
//! assert_eq!(expansion.nodes.len(), 1);
//! ```
//!
//! ## Example (custom options)
//!
//! ```rust
//! use abbrev::{ExpandOptions, Expander};
//!
//! let expander = Expander::with_options(ExpandOptions {
//!     default_tag: "span".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(expander.expand(".x").unwrap().html, "<span class=\"x\"></span>");
//! ```

mod numbering;
mod parser;
mod service;

pub use abbrev_core::{escape_attribute, escape_text, AttrValue, Node, Options};
pub use numbering::{apply_numbering, clone_nodes, number_placeholders, repeat_nodes};
pub use parser::Parser;
pub use service::{
    expand, ExpandOptions, Expander, Expansion, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES,
    DEFAULT_MAX_REPEAT,
};

/// Error type for abbreviation expansion
///
/// Positions are character offsets into the abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("Empty abbreviation")]
    EmptyAbbreviation,

    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    #[error("Unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("Unclosed group starting at position {position}")]
    UnclosedGroup { position: usize },

    #[error("Unclosed attribute set starting at position {position}")]
    UnclosedAttributeSet { position: usize },

    #[error("Unclosed text segment starting at position {position}")]
    UnclosedText { position: usize },

    #[error("Unclosed quoted attribute value starting at position {position}")]
    UnclosedQuote { position: usize },

    #[error("Duplicate id at position {position}")]
    DuplicateId { position: usize },

    #[error("Expected a positive repeat count at position {position}")]
    InvalidMultiplier { position: usize },

    #[error("Repeat count {count} exceeds the limit of {limit} at position {position}")]
    MultiplierTooLarge {
        count: usize,
        limit: usize,
        position: usize,
    },

    #[error("Expansion exceeds the limit of {limit} nodes at position {position}")]
    TooManyNodes { limit: usize, position: usize },

    #[error("Nesting exceeds the limit of {limit} levels at position {position}")]
    TooDeep { limit: usize, position: usize },

    #[error("Expected attribute value at position {position}")]
    ExpectedAttributeValue { position: usize },

    #[error("Expected {what} at position {position}")]
    ExpectedIdentifier { what: &'static str, position: usize },
}

impl ExpandError {
    /// Character offset where expansion failed, if there is one
    pub fn position(&self) -> Option<usize> {
        match self {
            ExpandError::EmptyAbbreviation => None,
            ExpandError::UnexpectedCharacter { position, .. }
            | ExpandError::UnexpectedEnd { position }
            | ExpandError::UnclosedGroup { position }
            | ExpandError::UnclosedAttributeSet { position }
            | ExpandError::UnclosedText { position }
            | ExpandError::UnclosedQuote { position }
            | ExpandError::DuplicateId { position }
            | ExpandError::InvalidMultiplier { position }
            | ExpandError::MultiplierTooLarge { position, .. }
            | ExpandError::TooManyNodes { position, .. }
            | ExpandError::TooDeep { position, .. }
            | ExpandError::ExpectedAttributeValue { position }
            | ExpandError::ExpectedIdentifier { position, .. } => Some(*position),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpandError>;
