//! Node tree rendering
//!
//! Converts a node forest into indented markup text. Every element is emitted
//! as an open/close pair; void elements are not special-cased.

use crate::escape::push_escaped;
use crate::node::{AttrValue, Node};
use crate::options::Options;

/// Render a node forest, one top-level block per root joined by newlines
pub fn render(nodes: &[Node], options: &Options) -> String {
    let mut output = String::with_capacity(nodes.iter().map(Node::count).sum::<usize>() * 32);

    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        render_node(node, options, 0, &mut output);
    }

    output
}

/// Render a single node at the given indentation depth
pub fn render_node(node: &Node, options: &Options, depth: usize, out: &mut String) {
    let indent = options.indent.repeat(depth);

    out.push_str(&indent);
    push_open_tag(node, out);

    match (&node.text, node.children.is_empty()) {
        (None, true) => {}

        (Some(text), true) if !text.contains('\n') => {
            push_escaped(text, false, out);
        }

        (text, _) => {
            let inner = options.indent.repeat(depth + 1);

            if let Some(text) = text {
                for line in text.split('\n') {
                    out.push('\n');
                    out.push_str(&inner);
                    push_escaped(line, false, out);
                }
            }

            for child in &node.children {
                out.push('\n');
                render_node(child, options, depth + 1, out);
            }

            out.push('\n');
            out.push_str(&indent);
        }
    }

    push_close_tag(node, out);
}

fn push_open_tag(node: &Node, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);

    if let Some(ref id) = node.id {
        push_attribute("id", id, out);
    }

    if !node.classes.is_empty() {
        push_attribute("class", &node.classes.join(" "), out);
    }

    for (name, value) in &node.attributes {
        match value {
            AttrValue::Flag => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Value(value) => push_attribute(name, value, out),
        }
    }

    out.push('>');
}

fn push_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(value, true, out);
    out.push('"');
}

fn push_close_tag(node: &Node, out: &mut String) {
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}
