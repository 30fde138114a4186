//! Color representation

use crate::error::{Error, Result};
use std::str::FromStr;

/// Canonical color: fractional red/green/blue channels
///
/// Every accepted color literal normalizes to this form. Channels are
/// nominally in `[0.0, 1.0]` and rounded to 8 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// A color literal in any of the accepted shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Hex string such as `"#ff0000"`; the digits split into three equal groups
    Hex(String),
    /// 8-bit channels, each divided by 255
    Rgb8([u8; 3]),
    /// Already-canonical fractional channels, passed through unchanged
    Fractional(Color),
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };
    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    /// Create a color from fractional channels
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from 8-bit channels
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            red: channel(u64::from(r)),
            green: channel(u64::from(g)),
            blue: channel(u64::from(b)),
        }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    ///
    /// The digits are split into three equal groups, so "#F00" and
    /// "#FFF000000" are accepted too; each group is read as an integer
    /// and divided by 255.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        let unsupported = || Error::UnsupportedColorFormat(format!("'{}'", hex));

        if digits.is_empty()
            || digits.len() % 3 != 0
            || digits.len() > 48
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(unsupported());
        }

        let width = digits.len() / 3;
        let group = |i: usize| -> Result<f64> {
            u64::from_str_radix(&digits[i * width..(i + 1) * width], 16)
                .map(channel)
                .map_err(|_| unsupported())
        };

        Ok(Self {
            red: group(0)?,
            green: group(1)?,
            blue: group(2)?,
        })
    }

    /// Normalize any accepted color literal
    ///
    /// ```
    /// use cellwire_core::Color;
    ///
    /// let red = Color::normalize("#FF0000").unwrap();
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0));
    /// assert_eq!(Color::normalize([255, 0, 0]).unwrap(), red);
    /// ```
    pub fn normalize(input: impl Into<ColorInput>) -> Result<Self> {
        match input.into() {
            ColorInput::Hex(s) => Self::from_hex(&s),
            ColorInput::Rgb8([r, g, b]) => Ok(Self::rgb8(r, g, b)),
            ColorInput::Fractional(c) => Ok(c),
        }
    }
}

fn channel(value: u64) -> f64 {
    round8(value as f64 / 255.0)
}

fn round8(x: f64) -> f64 {
    (x * 1e8).round() / 1e8
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        ColorInput::Hex(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Hex(s)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(rgb: [u8; 3]) -> Self {
        ColorInput::Rgb8(rgb)
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorInput::Rgb8([r, g, b])
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Fractional(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::new(1.0, 0.0, 0.0));
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::new(0.0, 1.0, 0.0));
        assert_eq!(
            Color::from_hex("#808080").unwrap(),
            Color::new(0.50196078, 0.50196078, 0.50196078)
        );
        // Single-digit groups are read as-is, not doubled
        assert_eq!(
            Color::from_hex("#F00").unwrap(),
            Color::new(0.05882353, 0.0, 0.0)
        );
    }

    #[test]
    fn test_from_hex_errors() {
        for bad in ["", "#", "#FF00", "#GG0000", "#+F+F+F"] {
            assert!(
                matches!(Color::from_hex(bad), Err(Error::UnsupportedColorFormat(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_shapes_agree() {
        let hex = Color::normalize("#FF0000").unwrap();
        assert_eq!(hex, Color::normalize([255, 0, 0]).unwrap());
        assert_eq!(hex, Color::normalize((255, 0, 0)).unwrap());
        assert_eq!(hex, Color::normalize(Color::new(1.0, 0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_fractional_passes_through() {
        let odd = Color::new(0.123456789, 0.5, 0.25);
        assert_eq!(Color::normalize(odd).unwrap(), odd);
    }

    #[test]
    fn test_rgb8_rounding() {
        assert_eq!(Color::rgb8(1, 2, 3), Color::new(0.00392157, 0.00784314, 0.01176471));
    }
}
