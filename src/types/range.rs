use serde::{Deserialize, Serialize};

/// A (row, column) pair, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: u32,
    pub column: u32,
}

impl CellPosition {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Key used for grid cell elements ("row:column")
    pub fn key(self) -> String {
        format!("{}:{}", self.row, self.column)
    }
}

/// Rectangular window of mounted cells, inclusive on both ends.
///
/// `from <= to` component-wise. An empty mount set collapses both bounds to
/// (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexRange {
    pub from: CellPosition,
    pub to: CellPosition,
}

impl IndexRange {
    pub const fn new(from: CellPosition, to: CellPosition) -> Self {
        Self { from, to }
    }

    /// Number of rows spanned (inclusive)
    pub fn row_span(&self) -> u32 {
        self.to.row.saturating_sub(self.from.row) + 1
    }

    /// Number of columns spanned (inclusive)
    pub fn column_span(&self) -> u32 {
        self.to.column.saturating_sub(self.from.column) + 1
    }

    pub fn contains(&self, pos: CellPosition) -> bool {
        (self.from.row..=self.to.row).contains(&pos.row)
            && (self.from.column..=self.to.column).contains(&pos.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_are_inclusive() {
        let range = IndexRange::new(CellPosition::new(1, 0), CellPosition::new(3, 2));
        assert_eq!(range.row_span(), 3);
        assert_eq!(range.column_span(), 3);
        assert!(range.contains(CellPosition::new(2, 1)));
        assert!(!range.contains(CellPosition::new(0, 1)));
        assert!(!range.contains(CellPosition::new(2, 3)));
    }

    #[test]
    fn test_default_is_origin() {
        let range = IndexRange::default();
        assert_eq!(range.from, CellPosition::new(0, 0));
        assert_eq!(range.to, CellPosition::new(0, 0));
        assert_eq!(CellPosition::new(4, 7).key(), "4:7");
    }
}
