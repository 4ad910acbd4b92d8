//! JavaScript renderer callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{Result, StickyGridError};
use crate::render::{CellRenderer, Node, Style};
use crate::types::ItemData;

/// The host's item payload, passed to callbacks as the same JS object the host supplied.
pub(crate) type SharedPayload = Rc<RefCell<JsValue>>;

fn js_error_message(e: &JsValue) -> String {
    e.as_string()
        .or_else(|| {
            js_sys::Reflect::get(e, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{e:?}"))
}

/// Wraps `(rowIndex, columnIndex, data, style) => string | null`.
///
/// A string return is inserted as markup; `null`/`undefined` render nothing.
pub(crate) struct JsRenderer {
    callback: Function,
    payload: SharedPayload,
}

impl JsRenderer {
    pub(crate) fn new(callback: Function, payload: SharedPayload) -> Self {
        Self { callback, payload }
    }
}

impl CellRenderer<ItemData> for JsRenderer {
    fn render(
        &self,
        row_index: u32,
        column_index: u32,
        _data: &ItemData,
        style: &Style,
    ) -> Result<Node> {
        let style_js = style
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StickyGridError::Render(e.to_string()))?;
        let payload = self.payload.borrow();
        let args = js_sys::Array::of4(
            &JsValue::from(row_index),
            &JsValue::from(column_index),
            &payload,
            &style_js,
        );
        let out = self
            .callback
            .apply(&JsValue::NULL, &args)
            .map_err(|e| StickyGridError::Render(js_error_message(&e)))?;
        if out.is_null() || out.is_undefined() {
            return Ok(Node::text(""));
        }
        out.as_string().map(Node::raw).ok_or_else(|| {
            StickyGridError::Render(format!(
                "renderer for {row_index}:{column_index} must return a string"
            ))
        })
    }
}
