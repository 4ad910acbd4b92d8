//! Color handling for the grid theme.
//!
//! Colors stay CSS strings end to end; parsing only validates them.

/// A CSS color string (e.g., "#E5E7EB")
pub type CssColor = String;

/// RGB color with u8 components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #), 6 or 3 digits.
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                let digit = |i: usize| -> Option<u8> {
                    let v = u8::from_str_radix(hex.get(i..=i)?, 16).ok()?;
                    Some(v * 17)
                };
                Some(Self {
                    r: digit(0)?,
                    g: digit(1)?,
                    b: digit(2)?,
                })
            }
            _ => None,
        }
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Default grid colors
pub mod palette {
    /// Horizontal row rule (Tailwind gray-200)
    pub const RULE: &str = "#E5E7EB";
    pub const BACKGROUND: &str = "#FFFFFF";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#E5E7EB"), Some(Rgb::new(0xE5, 0xE7, 0xEB)));
        assert_eq!(Rgb::from_hex("ffffff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("#12"), None);
        assert_eq!(Rgb::from_hex("white"), None);
    }

    #[test]
    fn test_hex_roundtrip() {
        assert_eq!(Rgb::new(0xE5, 0xE7, 0xEB).to_hex(), palette::RULE);
    }
}
