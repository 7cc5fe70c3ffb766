//! Repetition and numbering of node subtrees.
//!
//! Repeated subtrees are deep clones, so each instance can be numbered
//! without touching its siblings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use abbrev_core::{AttrValue, Node};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$+").expect("valid regex"));

/// Produce `count` numbered copies of `nodes`, in repetition order
pub fn repeat_nodes(nodes: &[Node], count: usize) -> Vec<Node> {
    trace!(target: "abbrev", roots = nodes.len(), count, "repeating nodes");

    let mut result = Vec::with_capacity(nodes.len() * count);
    for index in 0..count {
        for node in nodes {
            let mut copy = node.clone();
            apply_numbering(&mut copy, index);
            result.push(copy);
        }
    }
    result
}

/// Produce one unnumbered copy of `nodes`
pub fn clone_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes.to_vec()
}

/// Substitute `$` runs in this subtree with the 1-based `index + 1`.
///
/// Touches ids, classes, string attribute values and text; never tag names,
/// attribute names or flag attributes.
pub fn apply_numbering(node: &mut Node, index: usize) {
    let number = index + 1;

    if let Some(ref mut id) = node.id {
        number_in_place(id, number);
    }

    for class in &mut node.classes {
        number_in_place(class, number);
    }

    for value in node.attributes.values_mut() {
        if let AttrValue::Value(ref mut value) = value {
            number_in_place(value, number);
        }
    }

    if let Some(ref mut text) = node.text {
        number_in_place(text, number);
    }

    for child in &mut node.children {
        apply_numbering(child, index);
    }
}

/// Replace each `$` run in `s` with `number`, zero-padded to the run length
pub fn number_placeholders(s: &str, number: usize) -> String {
    PLACEHOLDER
        .replace_all(s, |caps: &Captures| {
            format!("{:0width$}", number, width = caps[0].len())
        })
        .into_owned()
}

fn number_in_place(s: &mut String, number: usize) {
    if s.contains('$') {
        *s = number_placeholders(s, number);
    }
}
