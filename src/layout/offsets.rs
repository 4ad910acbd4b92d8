//! Leading-edge offsets for the sticky bands.
//!
//! The bands sit outside the scrolled content's coordinate space, so the
//! distance the content has scrolled is re-derived by summing the sizes of
//! the rows/columns that have scrolled out. The result is applied once, as a
//! margin on the first band element past the pinned region.

use super::sizes::{size_or_zero, SizeLookup};
use crate::types::StickyColumns;

/// First row index counted by [`sum_row_heights`]; rows 0 and 1 never are.
pub const FIRST_ACCUMULATED_ROW: u32 = 2;

/// Sum of `row_height(i)` for `i` in `2..target_row`.
///
/// Returns 0 for `target_row <= 2`.
pub fn sum_row_heights(row_height: &dyn SizeLookup, target_row: u32) -> f32 {
    (FIRST_ACCUMULATED_ROW..target_row)
        .rev()
        .map(|i| size_or_zero(row_height, i))
        .sum()
}

/// Sum of `column_width(i)` for `i` in `sticky..target_column`.
///
/// Returns 0 for `target_column <= sticky.count()`.
pub fn sum_column_widths(
    column_width: &dyn SizeLookup,
    sticky: StickyColumns,
    target_column: u32,
) -> f32 {
    (sticky.count()..target_column)
        .rev()
        .map(|i| size_or_zero(column_width, i))
        .sum()
}

/// Both accumulators bound to one render's sizing functions.
pub struct OffsetAccumulator<'a> {
    column_width: &'a dyn SizeLookup,
    row_height: &'a dyn SizeLookup,
    sticky: StickyColumns,
}

impl<'a> OffsetAccumulator<'a> {
    pub fn new(
        column_width: &'a dyn SizeLookup,
        row_height: &'a dyn SizeLookup,
        sticky: StickyColumns,
    ) -> Self {
        Self {
            column_width,
            row_height,
            sticky,
        }
    }

    /// Vertical offset for the sticky column cell tracking `target_row`.
    pub fn row_offset(&self, target_row: u32) -> f32 {
        sum_row_heights(self.row_height, target_row)
    }

    /// Horizontal offset for the header cell tracking `target_column`.
    pub fn column_offset(&self, target_column: u32) -> f32 {
        sum_column_widths(self.column_width, self.sticky, target_column)
    }
}
