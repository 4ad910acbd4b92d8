use serde::{Deserialize, Serialize};

use super::ItemData;
use crate::error::{Result, StickyGridError};
use crate::layout::{SizeTable, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
use crate::render::colors::{palette, CssColor, Rgb};

/// Number of leading columns pinned to the left edge.
///
/// Only zero or one pinned column is supported. Row 0 is always the pinned
/// header row and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum StickyColumns {
    #[default]
    None,
    One,
}

impl StickyColumns {
    /// Width of the pinned band in columns
    pub const fn count(self) -> u32 {
        match self {
            Self::None => 0,
            Self::One => 1,
        }
    }

    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::One)
    }
}

impl TryFrom<u32> for StickyColumns {
    type Error = StickyGridError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::One),
            other => Err(StickyGridError::InvalidConfig(format!(
                "numberOfStickiedColumns must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl From<StickyColumns> for u32 {
    fn from(value: StickyColumns) -> Self {
        value.count()
    }
}

/// Cosmetic settings for the composed container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridTheme {
    /// Color of the repeating horizontal row rule
    pub rule_color: CssColor,
    /// Container background between rules
    pub background_color: CssColor,
    /// Extra container height reserved for the sticky header band
    pub header_band_height: f32,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            rule_color: palette::RULE.to_string(),
            background_color: palette::BACKGROUND.to_string(),
            header_band_height: 60.0,
        }
    }
}

impl GridTheme {
    pub fn validate(&self) -> Result<()> {
        for color in [&self.rule_color, &self.background_color] {
            if !color.starts_with('#') || Rgb::from_hex(color).is_none() {
                return Err(StickyGridError::InvalidConfig(format!(
                    "expected a #RGB or #RRGGBB color, got {color:?}"
                )));
            }
        }
        check_size("headerBandHeight", self.header_band_height)
    }

    /// CSS `background` for the row-rule pattern.
    ///
    /// The -4px offset lines the 1px rule up with the bottom edge of each row
    /// once the header band is accounted for.
    pub fn rule_background(&self) -> String {
        format!(
            "linear-gradient(to bottom, {} 1px, {} 1px) 0 -4px",
            self.rule_color, self.background_color
        )
    }
}

fn default_row_height() -> f32 {
    DEFAULT_ROW_HEIGHT
}

fn check_size(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StickyGridError::InvalidConfig(format!(
            "{name} must be a finite, non-negative pixel size, got {value}"
        )))
    }
}

/// Host-facing configuration for a sticky grid.
///
/// `height`/`width` are the viewport size and are forwarded to the
/// virtualization engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProps {
    pub height: f32,
    pub width: f32,
    #[serde(default)]
    pub number_of_stickied_columns: StickyColumns,
    pub row_count: u32,
    pub column_count: u32,
    /// Per-column widths; columns past the end use the default width
    #[serde(default)]
    pub column_widths: Vec<f32>,
    /// Uniform row height
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    #[serde(default)]
    pub item_data: ItemData,
    #[serde(default)]
    pub theme: GridTheme,
}

impl GridProps {
    /// Parse and validate props from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let props: GridProps = serde_json::from_str(json)?;
        props.validate()?;
        Ok(props)
    }

    /// Read, parse and validate props from a JSON file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        check_size("height", self.height)?;
        check_size("width", self.width)?;
        check_size("rowHeight", self.row_height)?;
        for (i, w) in self.column_widths.iter().enumerate() {
            check_size(&format!("columnWidths[{i}]"), *w)?;
        }
        self.theme.validate()
    }

    pub fn column_width_table(&self) -> SizeTable {
        SizeTable::new(self.column_widths.clone(), DEFAULT_COLUMN_WIDTH)
    }

    pub fn row_height_table(&self) -> SizeTable {
        SizeTable::uniform(self.row_height)
    }

    /// Total scrollable content height, as a virtualization engine would
    /// report it for this configuration.
    pub fn content_height(&self) -> f32 {
        // u32 -> f32 loses precision past 2^24 rows, well beyond pixel accuracy anyway
        #[allow(clippy::cast_precision_loss)]
        let rows = self.row_count as f32;
        rows * self.row_height
    }
}
