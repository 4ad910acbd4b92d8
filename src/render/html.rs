//! HTML serialization of a composed node tree.

use super::node::{Element, Node};

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "col", "wbr"];

fn escape_into(out: &mut String, text: &str, quote: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);
    if let Some(key) = &el.key {
        out.push_str(" data-key=\"");
        escape_into(out, key, true);
        out.push('"');
    }
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(out, value, true);
        out.push('"');
    }
    if !el.style.is_empty() {
        out.push_str(" style=\"");
        escape_into(out, &el.style.to_css(), true);
        out.push('"');
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text { text } => escape_into(out, text, false),
        Node::Raw { html } => out.push_str(html),
    }
}

/// Serialize `node` to markup with inline styles.
///
/// Element keys are emitted as `data-key` attributes.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}
