//! Text style types

use super::Color;

/// Text style settings
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name (e.g., "Arial")
    pub family: String,
    /// Font size in points
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    /// Foreground (text) color
    pub color: Color,
}

impl TextStyle {
    pub const DEFAULT_FAMILY: &'static str = "Arial";
    pub const DEFAULT_SIZE: u32 = 10;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: Self::DEFAULT_FAMILY.to_string(),
            size: Self::DEFAULT_SIZE,
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            color: Color::BLACK,
        }
    }
}
