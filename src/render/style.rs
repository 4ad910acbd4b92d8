//! Inline style model for composed grid elements.
//!
//! Only the properties the sticky layout actually writes are modelled. Values
//! are pixels unless noted; CSS output uses a fixed property order so two
//! equal styles always serialize to the same string.

use serde::{Deserialize, Serialize};

/// CSS `display` values used by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Flex,
    InlineFlex,
    Contents,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::InlineFlex => "inline-flex",
            Self::Contents => "contents",
        }
    }
}

/// CSS `position` values used by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Relative,
    Absolute,
    Sticky,
}

impl Position {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Sticky => "sticky",
        }
    }
}

/// Inline style attached to an element.
///
/// `None` means "not set" and leaves the property to normal flow, which is how
/// the header and sticky-column cells without a leading-edge offset behave.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display: Option<Display>,
    /// Flex shorthand (e.g. "none")
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub margin_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub margin_top: Option<f32>,
    /// Raw CSS `background` shorthand
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<String>,
    /// Raw CSS `background-size`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background_size: Option<String>,
    /// Host declarations not modelled above, kept verbatim. A typed property
    /// of the same name replaces the entry on output.
    #[serde(skip)]
    pub extra: Vec<(String, String)>,
}

/// Format a pixel length the way CSS expects it.
pub fn px(value: f32) -> String {
    format!("{value}px")
}

impl Style {
    /// Layer `over` on top of `self`: every property set in `over` wins.
    pub fn merged_with(&self, over: &Style) -> Style {
        Style {
            display: over.display.or(self.display),
            flex: over.flex.clone().or_else(|| self.flex.clone()),
            position: over.position.or(self.position),
            top: over.top.or(self.top),
            left: over.left.or(self.left),
            z_index: over.z_index.or(self.z_index),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            min_width: over.min_width.or(self.min_width),
            margin_left: over.margin_left.or(self.margin_left),
            margin_top: over.margin_top.or(self.margin_top),
            background: over.background.clone().or_else(|| self.background.clone()),
            background_size: over
                .background_size
                .clone()
                .or_else(|| self.background_size.clone()),
            extra: self
                .extra
                .iter()
                .filter(|(name, _)| !over.extra.iter().any(|(n, _)| n == name))
                .chain(&over.extra)
                .cloned()
                .collect(),
        }
    }

    /// Parse an inline `style` attribute into untyped declarations.
    ///
    /// Later duplicates win; empty or malformed declarations are skipped.
    pub fn from_css(css: &str) -> Style {
        let mut extra: Vec<(String, String)> = Vec::new();
        for decl in css.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let (name, value) = (name.trim().to_ascii_lowercase(), value.trim());
            if name.is_empty() || value.is_empty() {
                continue;
            }
            extra.retain(|(n, _)| *n != name);
            extra.push((name, value.to_string()));
        }
        Style {
            extra,
            ..Style::default()
        }
    }

    /// CSS declarations in a stable order.
    fn typed_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(display) = self.display {
            out.push(("display", display.as_css().to_string()));
        }
        if let Some(flex) = &self.flex {
            out.push(("flex", flex.clone()));
        }
        if let Some(position) = self.position {
            out.push(("position", position.as_css().to_string()));
        }
        if let Some(top) = self.top {
            out.push(("top", px(top)));
        }
        if let Some(left) = self.left {
            out.push(("left", px(left)));
        }
        if let Some(z) = self.z_index {
            out.push(("z-index", z.to_string()));
        }
        if let Some(width) = self.width {
            out.push(("width", px(width)));
        }
        if let Some(height) = self.height {
            out.push(("height", px(height)));
        }
        if let Some(min_width) = self.min_width {
            out.push(("min-width", px(min_width)));
        }
        if let Some(margin_left) = self.margin_left {
            out.push(("margin-left", px(margin_left)));
        }
        if let Some(margin_top) = self.margin_top {
            out.push(("margin-top", px(margin_top)));
        }
        if let Some(background) = &self.background {
            out.push(("background", background.clone()));
        }
        if let Some(size) = &self.background_size {
            out.push(("background-size", size.clone()));
        }
        out
    }

    /// All declarations: untyped host entries first, then typed properties.
    pub fn declarations(&self) -> Vec<(String, String)> {
        let typed = self.typed_declarations();
        let mut out: Vec<(String, String)> = self
            .extra
            .iter()
            .filter(|(name, _)| !typed.iter().any(|(n, _)| n == name))
            .cloned()
            .collect();
        out.extend(typed.into_iter().map(|(n, v)| (n.to_string(), v)));
        out
    }

    /// Serialize to an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn is_empty(&self) -> bool {
        self.declarations().is_empty()
    }
}
