//! Header and cell renderer capability.
//!
//! The compositor never branches on which renderer it holds; it calls
//! [`CellRenderer::render`] with computed geometry and the opaque payload and
//! places whatever comes back.

use std::rc::Rc;

use super::node::{Element, Node};
use super::style::Style;
use crate::error::Result;
use crate::types::ItemData;

/// Renders one grid cell (or header cell) at the given indices.
///
/// Errors are propagated to the caller of `compose` untouched.
pub trait CellRenderer<D: ?Sized> {
    fn render(&self, row_index: u32, column_index: u32, data: &D, style: &Style) -> Result<Node>;
}

impl<D: ?Sized, F> CellRenderer<D> for F
where
    F: Fn(u32, u32, &D, &Style) -> Result<Node>,
{
    fn render(&self, row_index: u32, column_index: u32, data: &D, style: &Style) -> Result<Node> {
        self(row_index, column_index, data, style)
    }
}

/// Shared renderer; identity (pointer equality) keys the compositor cache.
pub type SharedRenderer<D> = Rc<dyn CellRenderer<D>>;

/// Convert a 0-based column index to spreadsheet letters (A, B, ..., Z, AA, ...)
pub fn column_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = u64::from(col) + 1;
    while n > 0 {
        n -= 1;
        let offset = u8::try_from(n % 26).unwrap_or(0);
        result.insert(0, char::from(b'A' + offset));
        n /= 26;
    }
    result
}

/// Header renderer labelling each column with its name, or its letter when
/// the payload has no name for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnNameHeader;

impl CellRenderer<ItemData> for ColumnNameHeader {
    fn render(
        &self,
        _row_index: u32,
        column_index: u32,
        data: &ItemData,
        _style: &Style,
    ) -> Result<Node> {
        let label = usize::try_from(column_index)
            .ok()
            .and_then(|i| data.column_names.get(i).cloned())
            .unwrap_or_else(|| column_letter(column_index));
        let mut el = Element::new("div")
            .with_attr("role", "columnheader")
            .with_child(Node::text(label));
        if data.focused_column_index == Some(column_index) {
            el = el.with_attr("class", "focused");
        }
        Ok(el.into())
    }
}

/// Cell renderer printing the value from `ItemData::filtered_data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCell;

impl CellRenderer<ItemData> for ValueCell {
    fn render(
        &self,
        row_index: u32,
        column_index: u32,
        data: &ItemData,
        _style: &Style,
    ) -> Result<Node> {
        let text = data.cell_text(row_index, column_index).unwrap_or_default();
        Ok(Element::new("div")
            .with_attr("role", "gridcell")
            .with_child(Node::text(text))
            .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StickyGridError;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_header_uses_names_then_letters() {
        let data = ItemData::with_column_names(["id", "name"]);
        let named = ColumnNameHeader.render(0, 1, &data, &Style::default()).unwrap();
        assert_eq!(named.children(), &[Node::text("name")]);
        let lettered = ColumnNameHeader.render(0, 2, &data, &Style::default()).unwrap();
        assert_eq!(lettered.children(), &[Node::text("C")]);
    }

    #[test]
    fn test_closure_renderer_errors_pass_through() {
        let failing = |_: u32, _: u32, _: &ItemData, _: &Style| -> Result<Node> {
            Err(StickyGridError::Render("boom".into()))
        };
        let shared: SharedRenderer<ItemData> = Rc::new(failing);
        let err = shared
            .render(1, 1, &ItemData::default(), &Style::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Render error: boom");
    }
}
