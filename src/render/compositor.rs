//! Overlay compositor: layers the sticky bands over the engine's cells.
//!
//! One container holds, in z-order from top:
//! - the top band (sticky `top: 0`): optional corner cell, then header cells
//! - the left band (sticky `left: 0`): one leading-column cell per row
//! - the pass-through content: mounted cells not covered by a band
//!
//! Every mounted cell ends up in exactly one place. Cells in row 0 or in the
//! pinned column are dropped from the pass-through stream and re-synthesized
//! by the bands.

use serde::Serialize;

use super::node::{Element, Node};
use super::renderer::SharedRenderer;
use super::style::{Display, Position, Style};
use crate::error::Result;
use crate::layout::{size_or_zero, MountOrder, OffsetAccumulator, SharedSize};
use crate::types::{
    CellPosition, CellRef, GridData, GridTheme, IndexRange, MountedCell, StickyColumns,
};

/// z-index of the whole top band
pub const TOP_BAND_Z_INDEX: i32 = 300;
/// z-index of the corner cell inside the top band
pub const CORNER_Z_INDEX: i32 = 200;
/// z-index of each header cell
pub const HEADER_CELL_Z_INDEX: i32 = 100;
/// z-index of each leading-column cell
pub const STICKY_COLUMN_Z_INDEX: i32 = 60;

/// Header row index; always pinned
pub const HEADER_ROW: u32 = 0;

/// What the virtualization engine hands the inner element on each render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostProps {
    /// Engine style for the inner element; `height` is the scroll height
    pub style: Style,
}

impl HostProps {
    pub fn with_scroll_height(height: f32) -> Self {
        Self {
            style: Style {
                height: Some(height),
                ..Style::default()
            },
        }
    }

    pub fn scroll_height(&self) -> f32 {
        self.style.height.unwrap_or(0.0)
    }
}

/// Result of one composition, with its parts exposed for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedGrid {
    /// Mounted window this frame was built from
    pub window: IndexRange,
    pub container_style: Style,
    /// Corner cell plus header cells
    pub top_band: Element,
    /// Leading-column cells; empty when no column is pinned
    pub left_band: Vec<Node>,
    /// Mounted cells passed through unchanged
    pub content: Vec<Node>,
    /// Widths of the columns considered this frame, starting at `window.from.column`
    pub column_widths: Vec<f32>,
    pub total_column_width: f32,
}

impl ComposedGrid {
    /// Header cells (excluding the corner)
    pub fn header_cells(&self) -> impl Iterator<Item = &Node> {
        self.top_band
            .children
            .iter()
            .skip(usize::from(self.has_corner()))
    }

    pub fn has_corner(&self) -> bool {
        self.top_band
            .children
            .first()
            .and_then(Node::style)
            .is_some_and(|s| s.z_index == Some(CORNER_Z_INDEX))
    }

    /// Assemble the container element the engine mounts as its inner element.
    pub fn into_node(self) -> Node {
        Element::new("div")
            .with_style(self.container_style)
            .with_child(self.top_band.into())
            .with_children(self.left_band)
            .with_children(self.content)
            .into()
    }
}

/// Per-render counts, reported the way render timings are
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComposeMetrics {
    pub mounted_cells: u32,
    pub pass_through_cells: u32,
    pub header_cells: u32,
    pub sticky_column_cells: u32,
    pub total_column_width: f32,
    pub cache_hit: bool,
    pub compose_ms: f64,
}

/// Composes the sticky overlay for one set of renderer/sizing callbacks.
///
/// Holds no per-frame state; [`compose`](Self::compose) is a pure function of
/// its arguments and the callbacks captured here.
pub struct Compositor<D: ?Sized> {
    pub(crate) cell_renderer: SharedRenderer<D>,
    pub(crate) header_renderer: SharedRenderer<D>,
    pub(crate) column_width: SharedSize,
    pub(crate) row_height: SharedSize,
    pub(crate) sticky_columns: StickyColumns,
    mount_order: MountOrder,
    theme: GridTheme,
}

impl<D: GridData + ?Sized> Compositor<D> {
    pub fn new(
        cell_renderer: SharedRenderer<D>,
        header_renderer: SharedRenderer<D>,
        column_width: SharedSize,
        row_height: SharedSize,
        sticky_columns: StickyColumns,
    ) -> Self {
        Self {
            cell_renderer,
            header_renderer,
            column_width,
            row_height,
            sticky_columns,
            mount_order: MountOrder::default(),
            theme: GridTheme::default(),
        }
    }

    #[must_use]
    pub fn with_mount_order(mut self, mount_order: MountOrder) -> Self {
        self.mount_order = mount_order;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: GridTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn sticky_columns(&self) -> StickyColumns {
        self.sticky_columns
    }

    fn column_width(&self, index: u32) -> f32 {
        size_or_zero(self.column_width.as_ref(), index)
    }

    fn row_height(&self, index: u32) -> f32 {
        size_or_zero(self.row_height.as_ref(), index)
    }

    /// Build the layered container for the currently mounted cells.
    pub fn compose(
        &self,
        children: &[MountedCell],
        host: &HostProps,
        data: &D,
    ) -> Result<ComposedGrid> {
        let sticky = self.sticky_columns;
        let pinned = sticky.count();
        let window = self.mount_order.extract(children);
        let offsets =
            OffsetAccumulator::new(self.column_width.as_ref(), self.row_height.as_ref(), sticky);

        let shown_columns = if children.is_empty() {
            u32::try_from(data.column_names().len()).unwrap_or(u32::MAX)
        } else {
            window
                .to
                .column
                .saturating_sub(window.from.column)
                .saturating_add(2)
        };
        // Row 0 belongs to the top band, so the leading column starts at row 1
        // at the earliest. At least one slot is synthesized for an empty window.
        let first_row = window.from.row.max(HEADER_ROW + 1);
        let shown_rows = window.to.row.saturating_add(1).saturating_sub(first_row).max(1);

        let column_widths: Vec<f32> = (0..=shown_columns)
            .map(|i| self.column_width(window.from.column.saturating_add(i)))
            .collect();
        let total_column_width: f32 = column_widths.iter().sum();

        let mut top_band = Element::new("div").with_style(Style {
            display: Some(Display::Flex),
            position: Some(Position::Sticky),
            top: Some(0.0),
            z_index: Some(TOP_BAND_Z_INDEX),
            ..Style::default()
        });

        if sticky.is_pinned() {
            let style = Style {
                flex: Some("none".into()),
                display: Some(Display::InlineFlex),
                width: Some(self.column_width(0)),
                height: Some(self.row_height(HEADER_ROW)),
                position: Some(Position::Sticky),
                top: Some(0.0),
                left: Some(0.0),
                z_index: Some(CORNER_Z_INDEX),
                ..Style::default()
            };
            let corner = self.header_renderer.render(HEADER_ROW, 0, data, &style)?;
            top_band
                .children
                .push(corner.keyed(CellPosition::new(HEADER_ROW, 0).key(), &style));
        }

        // Header columns start at the window's first column, but never inside
        // the pinned band, which the corner already covers.
        let first_column = window.from.column.max(pinned);
        for i in 0..shown_columns {
            // Stop at the last addressable column
            let Some(column) = first_column.checked_add(i) else {
                break;
            };
            // Only the header at index `pinned` carries the scroll offset; the rest
            // follow it in normal flow.
            let margin_left = (i == pinned).then(|| offsets.column_offset(column - pinned));
            let style = Style {
                flex: Some("none".into()),
                margin_left,
                display: Some(Display::Flex),
                width: Some(self.column_width(column)),
                height: Some(self.row_height(HEADER_ROW)),
                z_index: Some(HEADER_CELL_Z_INDEX),
                ..Style::default()
            };
            let header = self.header_renderer.render(HEADER_ROW, column, data, &style)?;
            top_band
                .children
                .push(header.keyed(CellPosition::new(HEADER_ROW, column).key(), &style));
        }

        let mut left_band = Vec::new();
        if sticky.is_pinned() {
            for i in 0..shown_rows {
                let row = first_row.saturating_add(i);
                let margin_top = (i == 1).then(|| offsets.row_offset(row));
                let style = Style {
                    margin_top,
                    width: Some(self.column_width(0)),
                    height: Some(self.row_height(row)),
                    position: Some(Position::Sticky),
                    left: Some(0.0),
                    z_index: Some(STICKY_COLUMN_Z_INDEX),
                    ..Style::default()
                };
                let cell = self.cell_renderer.render(row, 0, data, &style)?;
                left_band.push(cell.keyed(CellPosition::new(row, 0).key(), &style));
            }
        }

        let content: Vec<Node> = children
            .iter()
            .filter(|cell| {
                let pos = cell.position();
                pos.column >= pinned && pos.row != HEADER_ROW
            })
            .map(|cell| cell.node.clone())
            .collect();

        let container_style = host.style.merged_with(&Style {
            height: Some(host.scroll_height() + self.theme.header_band_height),
            min_width: Some(total_column_width),
            background: Some(self.theme.rule_background()),
            background_size: Some(format!("100% {}px", self.row_height(1))),
            ..Style::default()
        });

        Ok(ComposedGrid {
            window,
            container_style,
            top_band,
            left_band,
            content,
            column_widths,
            total_column_width,
        })
    }

    /// [`compose`](Self::compose), timed and counted.
    pub fn compose_with_metrics(
        &self,
        children: &[MountedCell],
        host: &HostProps,
        data: &D,
    ) -> Result<(ComposedGrid, ComposeMetrics)> {
        let start = now_ms();
        let grid = self.compose(children, host, data)?;
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        let corner = usize::from(grid.has_corner());
        let metrics = ComposeMetrics {
            mounted_cells: count(children.len()),
            pass_through_cells: count(grid.content.len()),
            header_cells: count(grid.top_band.children.len() - corner),
            sticky_column_cells: count(grid.left_band.len()),
            total_column_width: grid.total_column_width,
            cache_hit: false,
            compose_ms: now_ms() - start,
        };
        Ok((grid, metrics))
    }
}

/// One-shot composition without holding a [`Compositor`].
#[allow(clippy::too_many_arguments)]
pub fn compose<D: GridData + ?Sized>(
    children: &[MountedCell],
    column_width: SharedSize,
    row_height: SharedSize,
    data: &D,
    sticky_columns: StickyColumns,
    header_renderer: SharedRenderer<D>,
    cell_renderer: SharedRenderer<D>,
    host: &HostProps,
) -> Result<ComposedGrid> {
    Compositor::new(cell_renderer, header_renderer, column_width, row_height, sticky_columns)
        .compose(children, host, data)
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
