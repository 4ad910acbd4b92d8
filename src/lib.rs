//! stickygrid - sticky header row and pinned column over a virtualized grid
//!
//! A virtualization engine decides which cells of a very large grid are
//! mounted. This crate takes that mounted set and composes the engine's inner
//! element:
//! - a sticky top band (corner cell + header row) that tracks horizontal scroll
//! - an optional sticky left band (leading column) that tracks vertical scroll
//! - the remaining mounted cells, passed through unchanged
//!
//! Each cell is rendered exactly once. Composition is a pure function of its
//! inputs, and the compositor is memoized on callback identity.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { StickyGrid } from 'stickygrid';
//! await init();
//! const grid = new StickyGrid(props, renderHeader, renderCell);
//! grid.renderInto(innerRef, mountedCells, scrollHeight);
//! ```

pub mod error;
pub mod layout;
pub mod render;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::StickyGrid;

pub use error::StickyGridError;
pub use layout::{extract_window, sum_column_widths, sum_row_heights};
pub use render::{compose, ComposedGrid, Compositor, Node};
pub use types::*;

/// Compose a grid with the built-in renderers and return it as HTML
///
/// # Arguments
/// * `props_json` - `GridProps` as JSON
/// * `mounted` - Mounted cell indices as flat `[row, column, row, column, ...]` pairs
/// * `scroll_height` - Scrollable content height reported by the engine
///
/// # Errors
/// Returns an error if the props are invalid or `mounted` has odd length.
#[wasm_bindgen]
pub fn compose_html(
    props_json: &str,
    mounted: &[u32],
    scroll_height: f32,
) -> Result<String, JsValue> {
    render::compose_pairs_html(props_json, mounted, scroll_height)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
