use serde::{Deserialize, Serialize};

use super::CellPosition;
use crate::render::Node;

/// Read access to the row/column tags of a mounted cell.
///
/// Missing indices are reported as `None`; consumers treat them as 0.
pub trait CellRef {
    fn row_index(&self) -> Option<u32>;
    fn column_index(&self) -> Option<u32>;

    /// Indices with missing values defaulted to 0
    fn position(&self) -> CellPosition {
        CellPosition::new(
            self.row_index().unwrap_or(0),
            self.column_index().unwrap_or(0),
        )
    }
}

/// A cell instance the virtualization engine has currently mounted.
///
/// The engine owns these; the compositor only reads the indices and forwards
/// the node into the pass-through content unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountedCell {
    #[serde(default)]
    pub row_index: Option<u32>,
    #[serde(default)]
    pub column_index: Option<u32>,
    pub node: Node,
}

impl MountedCell {
    pub fn new(row_index: u32, column_index: u32, node: Node) -> Self {
        Self {
            row_index: Some(row_index),
            column_index: Some(column_index),
            node,
        }
    }

    /// Build from engine-supplied indices that may be missing, negative or
    /// out of range.
    pub fn from_raw(row_index: Option<i64>, column_index: Option<i64>, node: Node) -> Self {
        Self {
            row_index: row_index.map(index_or_zero),
            column_index: column_index.map(index_or_zero),
            node,
        }
    }
}

/// A raw engine index as `u32`; negative or out-of-range values are malformed
/// and become 0.
pub fn index_or_zero(raw: i64) -> u32 {
    u32::try_from(raw).unwrap_or(0)
}

impl CellRef for MountedCell {
    fn row_index(&self) -> Option<u32> {
        self.row_index
    }

    fn column_index(&self) -> Option<u32> {
        self.column_index
    }
}

impl CellRef for CellPosition {
    fn row_index(&self) -> Option<u32> {
        Some(self.row)
    }

    fn column_index(&self) -> Option<u32> {
        Some(self.column)
    }
}

impl CellRef for (u32, u32) {
    fn row_index(&self) -> Option<u32> {
        Some(self.0)
    }

    fn column_index(&self) -> Option<u32> {
        Some(self.1)
    }
}
