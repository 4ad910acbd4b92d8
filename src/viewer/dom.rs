//! DOM materialization of composed node trees.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::render::{Display, Node, Style};

/// Build live DOM for `node`.
///
/// Raw markup from host renderers is parsed into a `display: contents`
/// wrapper so it takes no box of its own.
pub(crate) fn materialize(document: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Element(el) => {
            let element = document.create_element(&el.tag)?;
            if let Some(key) = &el.key {
                element.set_attribute("data-key", key)?;
            }
            for (name, value) in &el.attrs {
                element.set_attribute(name, value)?;
            }
            if !el.style.is_empty() {
                element.set_attribute("style", &el.style.to_css())?;
            }
            for child in &el.children {
                element.append_child(&materialize(document, child)?)?;
            }
            Ok(element.into())
        }
        Node::Text { text } => Ok(document.create_text_node(text).into()),
        Node::Raw { html } => {
            let wrapper = document.create_element("div")?;
            let style = Style {
                display: Some(Display::Contents),
                ..Style::default()
            };
            wrapper.set_attribute("style", &style.to_css())?;
            wrapper.set_inner_html(html);
            Ok(wrapper.into())
        }
    }
}
