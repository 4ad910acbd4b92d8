//! Backend-agnostic element tree produced by the compositor.
//!
//! The tree is plain data: the HTML serializer and the DOM materializer both
//! walk it, and tests inspect it directly.

use serde::{Deserialize, Serialize};

use super::style::Style;

/// A rendered node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// An element with style and children
    Element(Element),
    /// Escaped text content
    Text { text: String },
    /// Pre-rendered markup from a host renderer, inserted verbatim
    Raw { html: String },
}

/// A single element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag: String,
    /// Stable identity among siblings ("row:column" for grid cells)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attrs: Vec<(String, String)>,
    #[serde(default)]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: Vec::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Node::Raw { html: html.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.as_element().and_then(|el| el.key.as_deref())
    }

    pub fn style(&self) -> Option<&Style> {
        self.as_element().map(|el| &el.style)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            _ => &[],
        }
    }

    /// Attach a key and layer `style` over whatever the renderer produced.
    ///
    /// Text and raw markup have nowhere to carry either, so they get wrapped
    /// in a `div`.
    #[must_use]
    pub fn keyed(self, key: String, style: &Style) -> Node {
        match self {
            Node::Element(mut el) => {
                el.style = el.style.merged_with(style);
                el.key = Some(key);
                Node::Element(el)
            }
            other => Element::new("div")
                .with_key(key)
                .with_style(style.clone())
                .with_child(other)
                .into(),
        }
    }

    /// Depth-first pre-order walk.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::style::Position;

    #[test]
    fn test_keyed_element_keeps_renderer_style() {
        let rendered: Node = Element::new("span")
            .with_style(Style {
                background: Some("red".into()),
                ..Style::default()
            })
            .into();
        let layout = Style {
            position: Some(Position::Sticky),
            ..Style::default()
        };
        let node = rendered.keyed("0:3".into(), &layout);
        let el = node.as_element().unwrap();
        assert_eq!(el.key.as_deref(), Some("0:3"));
        assert_eq!(el.style.background.as_deref(), Some("red"));
        assert_eq!(el.style.position, Some(Position::Sticky));
    }

    #[test]
    fn test_keyed_text_is_wrapped() {
        let node = Node::text("hello").keyed("2:0".into(), &Style::default());
        assert_eq!(node.key(), Some("2:0"));
        assert_eq!(node.children(), &[Node::text("hello")]);
    }

    #[test]
    fn test_walk_visits_all() {
        let tree: Node = Element::new("div")
            .with_child(Element::new("span").with_child(Node::text("a")).into())
            .with_child(Node::raw("<b>b</b>"))
            .into();
        let mut count = 0;
        tree.walk(&mut |_| count += 1);
        assert_eq!(count, 4);
    }
}
