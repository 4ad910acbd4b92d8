//! Pure geometry for the sticky grid.
//!
//! This module handles:
//! - Deriving the mounted window from the engine's cell set
//! - Accumulating leading-edge offsets for the sticky header row and column
//! - Width/height lookup functions

mod offsets;
mod sizes;
mod window;

pub use offsets::{sum_column_widths, sum_row_heights, OffsetAccumulator, FIRST_ACCUMULATED_ROW};
pub use sizes::{
    size_or_zero, SharedSize, SizeLookup, SizeTable, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT,
};
pub use window::{extract_window, extract_window_endpoints, MountOrder};
