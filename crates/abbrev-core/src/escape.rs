//! Escaping helpers for text content and attribute values.

/// Escape text content (`&`, `<`, `>`)
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    push_escaped(text, false, &mut result);
    result
}

/// Escape an attribute value (`&`, `<`, `>` and `"`)
pub fn escape_attribute(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    push_escaped(value, true, &mut result);
    result
}

pub(crate) fn push_escaped(s: &str, quotes: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
