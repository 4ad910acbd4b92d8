//! Tests for window extraction and leading-edge offset accumulation
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::*;
use stickygrid::layout::{
    extract_window, extract_window_endpoints, sum_column_widths, sum_row_heights, MountOrder,
    OffsetAccumulator, SizeTable,
};
use stickygrid::{CellPosition, IndexRange, MountedCell, StickyColumns};
use test_case::test_case;

fn heights() -> SizeTable {
    // rows 0..=5, then 10 each
    SizeTable::new(vec![60.0, 40.0, 30.0, 20.0, 25.0, 35.0], 10.0)
}

fn widths() -> SizeTable {
    SizeTable::new(vec![200.0, 100.0, 150.0, 80.0], 50.0)
}

// ============================================================================
// Offsets
// ============================================================================

#[test_case(0 => 0.0; "header row")]
#[test_case(1 => 0.0; "first row")]
#[test_case(2 => 0.0; "second row")]
#[test_case(3 => 30.0; "third row")]
#[test_case(6 => 110.0; "past table")]
#[test_case(8 => 130.0; "fallback rows")]
fn test_sum_row_heights(target: u32) -> f32 {
    sum_row_heights(&heights(), target)
}

#[test_case(StickyColumns::None, 0 => 0.0; "unpinned origin")]
#[test_case(StickyColumns::None, 2 => 300.0; "unpinned two columns")]
#[test_case(StickyColumns::One, 1 => 0.0; "pinned band only")]
#[test_case(StickyColumns::One, 3 => 250.0; "pinned skips column zero")]
#[test_case(StickyColumns::One, 6 => 430.0; "pinned with fallback")]
fn test_sum_column_widths(sticky: StickyColumns, target: u32) -> f32 {
    sum_column_widths(&widths(), sticky, target)
}

#[test]
fn test_offsets_ignore_bad_sizes() {
    let lookup = |i: u32| match i {
        2 => f32::NAN,
        3 => -15.0,
        4 => f32::INFINITY,
        _ => 12.0,
    };
    assert_eq!(sum_row_heights(&lookup, 7), 24.0);
    assert_eq!(sum_column_widths(&lookup, StickyColumns::None, 5), 24.0);
}

#[test]
fn test_accumulator_binds_sticky_count() {
    let (w, h) = (widths(), heights());
    let pinned = OffsetAccumulator::new(&w, &h, StickyColumns::One);
    let free = OffsetAccumulator::new(&w, &h, StickyColumns::None);
    assert_eq!(free.column_offset(3) - pinned.column_offset(3), 200.0);
    assert_eq!(pinned.row_offset(4), free.row_offset(4));
}

// ============================================================================
// Window extraction
// ============================================================================

#[test]
fn test_window_of_scan_order_rect() {
    let cells = mounted_rect(4..=9, 2..=6);
    let expected = IndexRange::new(CellPosition::new(4, 2), CellPosition::new(9, 6));
    assert_eq!(extract_window(&cells), expected);
    assert_eq!(extract_window_endpoints(&cells), expected);
    assert_eq!(MountOrder::ScanOrder.extract(&cells), expected);
}

#[test]
fn test_window_of_unordered_cells() {
    // Endpoints alone would see rows 5..=6 and columns 3..=4
    let cells: Vec<MountedCell> = [(5, 4), (2, 7), (9, 1), (6, 3)]
        .into_iter()
        .map(|(r, c)| mounted_cell(r, c))
        .collect();
    let full = extract_window(&cells);
    assert_eq!(full.from, CellPosition::new(2, 1));
    assert_eq!(full.to, CellPosition::new(9, 7));
    assert_eq!(MountOrder::default().extract(&cells), full);

    let endpoints = extract_window_endpoints(&cells);
    assert_eq!(endpoints.from, CellPosition::new(5, 3));
    assert_eq!(endpoints.to, CellPosition::new(6, 4));
}

#[test]
fn test_window_of_single_cell() {
    let cells = vec![mounted_cell(12, 3)];
    let window = extract_window(&cells);
    assert_eq!(window.from, window.to);
    assert_eq!(window.row_span(), 1);
    assert_eq!(window.column_span(), 1);
}

#[test]
fn test_window_of_nothing() {
    let cells: Vec<MountedCell> = Vec::new();
    assert_eq!(extract_window(&cells), IndexRange::default());
    assert_eq!(extract_window_endpoints(&cells), IndexRange::default());
}
