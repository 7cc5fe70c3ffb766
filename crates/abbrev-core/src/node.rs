//! Markup node tree
//!
//! This module defines the element node built by the abbreviation parser and
//! consumed by the renderer. Nodes own their children and attributes, so
//! cloning a node always yields a fully independent subtree.

use indexmap::IndexMap;

/// Tag name used when an abbreviation omits one (e.g. `.foo`)
pub const DEFAULT_TAG: &str = "div";

/// Value of a non-id, non-class attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Attribute present without a value (`[disabled]`)
    Flag,
    /// Attribute with a string value (`[href=/home]`)
    Value(String),
}

impl AttrValue {
    /// Get the string value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Flag => None,
            AttrValue::Value(value) => Some(value),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Value(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Value(value)
    }
}

/// A single markup element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Tag name
    pub tag: String,

    /// Element id
    pub id: Option<String>,

    /// Class names in insertion order (not deduplicated)
    pub classes: Vec<String>,

    /// Other attributes in insertion order; a repeated name overwrites the value
    pub attributes: IndexMap<String, AttrValue>,

    /// Literal text content, may contain newlines
    pub text: Option<String>,

    /// Child elements
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element with the default tag
    pub fn new() -> Self {
        Self::element(DEFAULT_TAG)
    }

    /// Create an element with the given tag
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, AttrValue::from(value));
        self
    }

    pub fn with_flag(mut self, name: &str) -> Self {
        self.set_attr(name, AttrValue::Flag);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set an attribute, replacing the value of an existing one in place
    pub fn set_attr(&mut self, name: &str, value: AttrValue) {
        self.attributes.insert(name.to_string(), value);
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Append text, concatenating with any existing text
    pub fn push_text(&mut self, text: &str) {
        match self.text {
            Some(ref mut existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Check if this node has neither text nor children
    pub fn is_leaf(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
