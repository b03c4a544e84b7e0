//! HTML serialization of element descriptions.

use std::fmt::Write;

use crate::element::{is_valid_attribute_name, is_void_element, AttrValue, Content, Element};

/// Serialize an element to HTML markup.
///
/// Attributes are written in insertion order. `true` booleans are written
/// bare, `false` booleans are omitted. Attributes whose names would break out
/// of the tag are skipped.
pub fn render_to_string(element: &Element) -> String {
    let mut out = String::with_capacity(64 + element.attributes.len() * 24);
    render_into(element, &mut out);
    log::trace!("[render] {} -> {} bytes", element.dom_id(), out.len());
    out
}

/// Serialize several elements, one per line.
pub fn render_all<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    elements
        .into_iter()
        .map(render_to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_into(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    for (name, value) in element.attributes.iter() {
        if !is_valid_attribute_name(name) {
            log::warn!("[render] skipping invalid attribute name {name:?} on {}", element.dom_id());
            continue;
        }
        match value {
            AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            other => {
                // Writing to a String cannot fail.
                let _ = write!(out, " {name}=\"{}\"", escape_html_attr(&other.to_string()));
            }
        }
    }

    if is_void_element(&element.tag) {
        out.push('>');
        return;
    }

    out.push('>');
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_html(text)),
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Escape text content.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted attribute value.
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
