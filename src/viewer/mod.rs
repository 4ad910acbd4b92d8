//! `StickyGrid` - the WASM-exported inner element for a JS virtualization engine.
//!
//! The engine keeps ownership of scrolling and of deciding which cells are
//! mounted. On each of its renders it hands the mounted cells to
//! [`StickyGrid::render_into`] (or [`StickyGrid::compose_html`]), which runs the
//! compositor and writes the layered container into the engine's ref element.
//!
//! Renderer callbacks and sizing are captured by identity: replacing either
//! rebuilds the compositor, anything else reuses it.

mod callbacks;
mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::StickyGridError;
use crate::render::{
    to_html, CellRenderer, ComposeMetrics, ComposedGrid, CompositorCache, CompositorKey,
    HostProps, Node, Style,
};
use crate::types::{CellRef, GridProps, ItemData, MountedCell, StickyColumns};
use callbacks::{JsRenderer, SharedPayload};

/// One mounted cell as the JS engine reports it
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MountedInput {
    #[serde(default)]
    row_index: Option<i64>,
    #[serde(default)]
    column_index: Option<i64>,
    /// Pre-rendered markup; rendered with the cell callback when absent
    #[serde(default)]
    html: Option<String>,
    /// Engine-computed placement (absolute position, size)
    #[serde(default)]
    style: Style,
}

/// The main grid struct exported to JavaScript
#[wasm_bindgen]
pub struct StickyGrid {
    props: GridProps,
    key: CompositorKey<ItemData>,
    cache: CompositorCache<ItemData>,
    payload: SharedPayload,
    last_metrics: Option<ComposeMetrics>,
}

/// Engine inline style with the scroll height applied
fn host_props(engine_css: &str, scroll_height: f32) -> HostProps {
    HostProps {
        style: Style::from_css(engine_css).merged_with(&Style {
            height: Some(scroll_height),
            ..Style::default()
        }),
    }
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl StickyGrid {
    /// Create a grid from `GridProps` (camelCase object) and two callbacks
    /// `(rowIndex, columnIndex, data, style) => string`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        props: JsValue,
        header_renderer: Function,
        cell_renderer: Function,
    ) -> Result<StickyGrid, JsValue> {
        console_error_panic_hook::set_once();

        let item_data_js = js_sys::Reflect::get(&props, &JsValue::from_str("itemData"))
            .unwrap_or(JsValue::UNDEFINED);
        let props: GridProps = serde_wasm_bindgen::from_value(props)?;
        props.validate()?;

        let payload: SharedPayload = Rc::new(RefCell::new(item_data_js));
        let key = CompositorKey {
            cell_renderer: Rc::new(JsRenderer::new(cell_renderer, Rc::clone(&payload))),
            header_renderer: Rc::new(JsRenderer::new(header_renderer, Rc::clone(&payload))),
            column_width: props.column_width_table().into_shared(),
            row_height: props.row_height_table().into_shared(),
            sticky_columns: props.number_of_stickied_columns,
        };
        let mut cache = CompositorCache::new();
        cache.set_theme(props.theme.clone());

        Ok(StickyGrid {
            props,
            key,
            cache,
            payload,
            last_metrics: None,
        })
    }

    /// Replace both renderer callbacks
    #[wasm_bindgen(js_name = "setRenderers")]
    pub fn set_renderers(&mut self, header_renderer: Function, cell_renderer: Function) {
        self.key.header_renderer =
            Rc::new(JsRenderer::new(header_renderer, Rc::clone(&self.payload)));
        self.key.cell_renderer = Rc::new(JsRenderer::new(cell_renderer, Rc::clone(&self.payload)));
    }

    #[wasm_bindgen(js_name = "setColumnWidths")]
    pub fn set_column_widths(&mut self, widths: Vec<f32>) -> Result<(), JsValue> {
        let mut props = self.props.clone();
        props.column_widths = widths;
        props.validate()?;
        self.key.column_width = props.column_width_table().into_shared();
        self.props = props;
        Ok(())
    }

    #[wasm_bindgen(js_name = "setRowHeight")]
    pub fn set_row_height(&mut self, row_height: f32) -> Result<(), JsValue> {
        let mut props = self.props.clone();
        props.row_height = row_height;
        props.validate()?;
        self.key.row_height = props.row_height_table().into_shared();
        self.props = props;
        Ok(())
    }

    #[wasm_bindgen(js_name = "setStickyColumns")]
    pub fn set_sticky_columns(&mut self, count: u32) -> Result<(), JsValue> {
        let sticky = StickyColumns::try_from(count)?;
        self.props.number_of_stickied_columns = sticky;
        self.key.sticky_columns = sticky;
        Ok(())
    }

    /// Replace the item payload. Does not rebuild the compositor.
    #[wasm_bindgen(js_name = "setItemData")]
    pub fn set_item_data(&mut self, item_data: JsValue) -> Result<(), JsValue> {
        self.props.item_data = serde_wasm_bindgen::from_value(item_data.clone())?;
        *self.payload.borrow_mut() = item_data;
        Ok(())
    }

    /// Compose and return the container as HTML markup.
    ///
    /// `engine_style` is the engine's inline style for its inner element
    /// (CSS text); its declarations are kept unless the grid overrides them.
    #[wasm_bindgen(js_name = "composeHtml")]
    pub fn compose_html(
        &mut self,
        mounted: JsValue,
        scroll_height: f32,
        engine_style: Option<String>,
    ) -> Result<String, JsValue> {
        let host = host_props(engine_style.as_deref().unwrap_or(""), scroll_height);
        let grid = self.compose(mounted, &host)?;
        Ok(to_html(&grid.into_node()))
    }

    /// Compose and replace the contents of `container` (the engine's inner
    /// element ref). Returns the metrics for this render.
    ///
    /// Inline style the engine already set on `container` is preserved,
    /// apart from the properties the grid writes.
    #[wasm_bindgen(js_name = "renderInto")]
    pub fn render_into(
        &mut self,
        container: HtmlElement,
        mounted: JsValue,
        scroll_height: f32,
    ) -> Result<JsValue, JsValue> {
        let existing = container.get_attribute("style").unwrap_or_default();
        let grid = self.compose(mounted, &host_props(&existing, scroll_height))?;
        let document = container
            .owner_document()
            .ok_or_else(|| js_err("container is not attached to a document"))?;

        container.set_attribute("style", &grid.container_style.to_css())?;
        container.set_inner_html("");
        let Node::Element(root) = grid.into_node() else {
            return Err(js_err("composed root is not an element"));
        };
        for child in &root.children {
            container.append_child(&dom::materialize(&document, child)?)?;
        }
        self.metrics()
    }

    /// Metrics from the latest render, or `undefined`
    pub fn metrics(&self) -> Result<JsValue, JsValue> {
        match &self.last_metrics {
            Some(m) => serde_wasm_bindgen::to_value(m).map_err(js_err),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Minimum container width from the latest render
    #[wasm_bindgen(js_name = "contentWidth")]
    pub fn content_width(&self) -> f32 {
        self.last_metrics
            .as_ref()
            .map_or(0.0, |m| m.total_column_width)
    }

    #[wasm_bindgen(js_name = "cacheHits")]
    pub fn cache_hits(&self) -> f64 {
        // u64 -> f64 is exact below 2^53 renders
        #[allow(clippy::cast_precision_loss)]
        let hits = self.cache.hits() as f64;
        hits
    }
}

impl StickyGrid {
    fn mounted_cells(&self, mounted: JsValue) -> Result<Vec<MountedCell>, StickyGridError> {
        let inputs: Vec<MountedInput> = serde_wasm_bindgen::from_value(mounted)
            .map_err(|e| StickyGridError::InvalidConfig(e.to_string()))?;
        inputs
            .into_iter()
            .map(|input| {
                let probe =
                    MountedCell::from_raw(input.row_index, input.column_index, Node::text(""));
                let pos = probe.position();
                let node = match input.html {
                    Some(html) => Node::raw(html),
                    None => self.key.cell_renderer.render(
                        pos.row,
                        pos.column,
                        &self.props.item_data,
                        &input.style,
                    )?,
                };
                Ok(MountedCell {
                    node: node.keyed(pos.key(), &input.style),
                    ..probe
                })
            })
            .collect()
    }

    fn compose(&mut self, mounted: JsValue, host: &HostProps) -> Result<ComposedGrid, JsValue> {
        let children = self.mounted_cells(mounted)?;
        let (grid, metrics) = self.cache.compose_with_metrics(
            &self.key,
            &children,
            host,
            &self.props.item_data,
        )?;
        self.last_metrics = Some(metrics);
        Ok(grid)
    }
}
