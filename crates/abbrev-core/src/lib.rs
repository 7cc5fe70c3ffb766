//! abbrev-core - markup node tree and rendering
//!
//! This crate provides the node model produced by the abbreviation parser in
//! `abbrev` and the renderer that turns a node forest into indented markup.
//!
//! # Architecture
//!
//! ```text
//! "ul>li*2" ──parse──▶ ┌───────────┐
//!                      │           │
//!                      │ Node tree │ ──render──▶ "<ul>\n  <li></li>\n  ..."
//! Node builders ──────▶│           │
//!                      └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use abbrev_core::{render, Node, Options};
//!
//! let mut list = Node::element("ul");
//! list.add_child(Node::element("li").with_class("item").with_text("One"));
//!
//! let html = render(&[list], &Options::default());
//! assert_eq!(html, "<ul>\n  <li class=\"item\">One</li>\n</ul>");
//! ```

mod escape;
mod node;
mod options;
mod render;

pub use escape::{escape_attribute, escape_text};
pub use node::{AttrValue, Node, DEFAULT_TAG};
pub use options::Options;
pub use render::{render, render_node};
