//! Visible-window extraction from the engine's mounted cells.

use crate::types::{CellPosition, CellRef, IndexRange};

/// How the virtualization engine orders its mounted cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountOrder {
    /// No ordering guarantee; the window is found by scanning every cell.
    #[default]
    Unspecified,
    /// Row-major scan order: the first cell is the top-left corner of the
    /// window and the last cell the bottom-right, so only the endpoints are read.
    ScanOrder,
}

impl MountOrder {
    pub fn extract<C: CellRef>(self, cells: &[C]) -> IndexRange {
        match self {
            Self::Unspecified => extract_window(cells),
            Self::ScanOrder => extract_window_endpoints(cells),
        }
    }
}

/// Smallest rectangle covering every mounted cell.
///
/// An empty slice yields the (0,0)-(0,0) range.
pub fn extract_window<C: CellRef>(cells: &[C]) -> IndexRange {
    let mut positions = cells.iter().map(CellRef::position);
    let Some(first) = positions.next() else {
        return IndexRange::default();
    };
    positions.fold(IndexRange::new(first, first), |range, pos| {
        IndexRange::new(
            CellPosition::new(range.from.row.min(pos.row), range.from.column.min(pos.column)),
            CellPosition::new(range.to.row.max(pos.row), range.to.column.max(pos.column)),
        )
    })
}

/// Window bounded by the first and last mounted cells only.
///
/// Constant time, but only correct when the engine mounts in scan order.
pub fn extract_window_endpoints<C: CellRef>(cells: &[C]) -> IndexRange {
    let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
        return IndexRange::default();
    };
    let (a, b) = (first.position(), last.position());
    IndexRange::new(
        CellPosition::new(a.row.min(b.row), a.column.min(b.column)),
        CellPosition::new(a.row.max(b.row), a.column.max(b.column)),
    )
}
