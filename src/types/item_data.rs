use serde::{Deserialize, Serialize};

/// Filter UI state, owned by the data model and never inspected by layout
pub type FilterValue = serde_json::Value;

/// What the compositor needs from the opaque item payload.
///
/// Only the column-name count is read, and only as the header column count
/// when nothing is mounted yet.
pub trait GridData {
    fn column_names(&self) -> &[String];
}

/// Payload forwarded unchanged to every header and cell render call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemData {
    pub column_names: Vec<String>,
    /// Filtered rows, one JSON value (array or object) per data row
    pub filtered_data: Vec<serde_json::Value>,
    pub filter: Option<FilterValue>,
    pub focused_column_index: Option<u32>,
    pub show_filters: bool,
}

impl GridData for ItemData {
    fn column_names(&self) -> &[String] {
        &self.column_names
    }
}

impl ItemData {
    pub fn with_column_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Display text for a data cell.
    ///
    /// Grid row 0 is the header, so grid row `r` maps to `filtered_data[r - 1]`.
    /// Rows may be arrays (positional) or objects (keyed by column name).
    pub fn cell_text(&self, row_index: u32, column_index: u32) -> Option<String> {
        let data_row = usize::try_from(row_index.checked_sub(1)?).ok()?;
        let col = usize::try_from(column_index).ok()?;
        let row = self.filtered_data.get(data_row)?;
        let value = match row {
            serde_json::Value::Array(items) => items.get(col)?,
            serde_json::Value::Object(map) => map.get(self.column_names.get(col)?)?,
            _ => return None,
        };
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}
