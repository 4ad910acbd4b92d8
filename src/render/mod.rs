//! Output construction for the sticky grid.
//!
//! This module provides:
//! - A backend-agnostic element tree and inline style model
//! - The renderer capability the compositor calls for header/cell content
//! - The overlay compositor and its identity-keyed memo
//! - HTML serialization of composed trees

pub mod cache;
pub mod colors;
pub mod compositor;
pub mod html;
pub mod node;
pub mod renderer;
pub mod style;

pub use cache::{CompositorCache, CompositorKey};
pub use colors::{palette, CssColor, Rgb};
pub use compositor::{
    compose, ComposeMetrics, ComposedGrid, Compositor, HostProps, CORNER_Z_INDEX,
    HEADER_CELL_Z_INDEX, HEADER_ROW, STICKY_COLUMN_Z_INDEX, TOP_BAND_Z_INDEX,
};
pub use html::to_html;
pub use node::{Element, Node};
pub use renderer::{column_letter, CellRenderer, ColumnNameHeader, SharedRenderer, ValueCell};
pub use style::{Display, Position, Style};

use std::rc::Rc;

use crate::error::{Result, StickyGridError};
use crate::layout::{size_or_zero, SizeLookup};
use crate::types::{CellPosition, GridProps, ItemData, MountedCell};

/// Render mounted cells at `positions` with the built-in value renderer,
/// absolutely positioned at their content offsets the way a virtualization
/// engine places them. Order is preserved.
pub fn mount_cells(
    props: &GridProps,
    positions: impl IntoIterator<Item = CellPosition>,
) -> Result<Vec<MountedCell>> {
    let widths = props.column_width_table();
    let heights = props.row_height_table();
    let offset = |lookup: &dyn SizeLookup, index: u32| -> f32 {
        (0..index).map(|i| size_or_zero(lookup, i)).sum()
    };

    positions
        .into_iter()
        .map(|pos| {
            let style = Style {
                position: Some(Position::Absolute),
                top: Some(offset(&heights, pos.row)),
                left: Some(offset(&widths, pos.column)),
                width: Some(size_or_zero(&widths, pos.column)),
                height: Some(size_or_zero(&heights, pos.row)),
                ..Style::default()
            };
            let node = ValueCell.render(pos.row, pos.column, &props.item_data, &style)?;
            Ok(MountedCell::new(
                pos.row,
                pos.column,
                node.keyed(pos.key(), &style),
            ))
        })
        .collect()
}

/// Mounted cells for a rectangular window in row-major scan order.
pub fn mount_rectangle(
    props: &GridProps,
    rows: std::ops::RangeInclusive<u32>,
    columns: std::ops::RangeInclusive<u32>,
) -> Result<Vec<MountedCell>> {
    let positions =
        rows.flat_map(|r| columns.clone().map(move |c| CellPosition::new(r, c)));
    mount_cells(props, positions)
}

/// Compose a grid for `props` with the built-in renderers and serialize it.
pub fn compose_props_html(
    props: &GridProps,
    children: &[MountedCell],
    scroll_height: f32,
) -> Result<(String, ComposeMetrics)> {
    let compositor: Compositor<ItemData> = Compositor::new(
        Rc::new(ValueCell),
        Rc::new(ColumnNameHeader),
        props.column_width_table().into_shared(),
        props.row_height_table().into_shared(),
        props.number_of_stickied_columns,
    )
    .with_theme(props.theme.clone());
    let host = HostProps::with_scroll_height(scroll_height);
    let (grid, metrics) = compositor.compose_with_metrics(children, &host, &props.item_data)?;
    Ok((to_html(&grid.into_node()), metrics))
}

/// [`compose_props_html`] for props JSON and mounted indices given as flat
/// `[row, column, ...]` pairs.
pub fn compose_pairs_html(props_json: &str, mounted: &[u32], scroll_height: f32) -> Result<String> {
    if mounted.len() % 2 != 0 {
        return Err(StickyGridError::InvalidConfig(format!(
            "mounted indices must be [row, column] pairs, got {} values",
            mounted.len()
        )));
    }
    let props = GridProps::from_json(props_json)?;
    let positions = mounted
        .chunks_exact(2)
        .filter_map(|pair| match pair {
            [row, column] => Some(CellPosition::new(*row, *column)),
            _ => None,
        });
    let cells = mount_cells(&props, positions)?;
    let (html, _metrics) = compose_props_html(&props, &cells, scroll_height)?;
    Ok(html)
}
