//! Shared helpers for composing grids in integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::rc::Rc;

use stickygrid::layout::SizeTable;
use stickygrid::render::{ComposedGrid, Compositor, Element, Node, SharedRenderer, Style};
use stickygrid::error::Result;
use stickygrid::{CellPosition, ItemData, MountedCell, StickyColumns};

/// Renderer producing `<div data-kind=kind data-row=.. data-column=..>`
pub fn tagging_renderer(kind: &'static str) -> SharedRenderer<ItemData> {
    Rc::new(
        move |row: u32, column: u32, _: &ItemData, _: &Style| -> Result<Node> {
            Ok(Element::new("div")
                .with_attr("data-kind", kind)
                .with_attr("data-row", row.to_string())
                .with_attr("data-column", column.to_string())
                .into())
        },
    )
}

pub fn mounted_cell(row: u32, column: u32) -> MountedCell {
    MountedCell::new(
        row,
        column,
        Element::new("span")
            .with_key(CellPosition::new(row, column).key())
            .with_attr("data-kind", "mounted")
            .into(),
    )
}

/// Row-major scan of a rectangle, the order a virtualization engine mounts in
pub fn mounted_rect(rows: RangeInclusive<u32>, columns: RangeInclusive<u32>) -> Vec<MountedCell> {
    rows.flat_map(|r| columns.clone().map(move |c| mounted_cell(r, c)))
        .collect()
}

pub fn compositor(sticky: StickyColumns) -> Compositor<ItemData> {
    Compositor::new(
        tagging_renderer("cell"),
        tagging_renderer("header"),
        SizeTable::new(vec![140.0, 90.0, 90.0, 120.0, 80.0, 100.0], 75.0).into_shared(),
        SizeTable::uniform(32.0).into_shared(),
        sticky,
    )
}

/// Parse a "row:column" key
pub fn position_of(node: &Node) -> CellPosition {
    let key = node.key().unwrap();
    let (row, column) = key.split_once(':').unwrap();
    CellPosition::new(row.parse().unwrap(), column.parse().unwrap())
}

pub fn positions(nodes: &[Node]) -> Vec<CellPosition> {
    nodes.iter().map(position_of).collect()
}

/// Every cell position rendered anywhere in the grid, in render order
pub fn all_rendered(grid: &ComposedGrid) -> Vec<CellPosition> {
    let mut out = positions(&grid.top_band.children);
    out.extend(positions(&grid.left_band));
    out.extend(positions(&grid.content));
    out
}

pub fn assert_no_duplicates(cells: &[CellPosition]) {
    let mut seen = HashSet::new();
    for cell in cells {
        assert!(seen.insert(*cell), "cell {}:{} rendered twice", cell.row, cell.column);
    }
}
