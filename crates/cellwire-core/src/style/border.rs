//! Border style types

use super::Color;

/// Borders of a cell, one optional definition per side
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderSet {
    pub top: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
    pub right: BorderSide,
}

impl BorderSet {
    /// Create a border set with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same side definition on all four sides
    pub fn all(side: BorderSide) -> Self {
        Self {
            top: side.clone(),
            bottom: side.clone(),
            left: side.clone(),
            right: side,
        }
    }

    /// Set the top border
    pub fn with_top(mut self, side: BorderSide) -> Self {
        self.top = side;
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, side: BorderSide) -> Self {
        self.bottom = side;
        self
    }

    /// Set the left border
    pub fn with_left(mut self, side: BorderSide) -> Self {
        self.left = side;
        self
    }

    /// Set the right border
    pub fn with_right(mut self, side: BorderSide) -> Self {
        self.right = side;
        self
    }

    /// Sides in wire order, paired with their wire names
    pub fn sides(&self) -> [(&'static str, &BorderSide); 4] {
        [
            ("top", &self.top),
            ("bottom", &self.bottom),
            ("left", &self.left),
            ("right", &self.right),
        ]
    }

    /// Check if all four sides are absent
    pub fn is_empty(&self) -> bool {
        self.sides().iter().all(|(_, side)| side.is_absent())
    }
}

/// A single border side
///
/// A side with no style, width, or color is absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderSide {
    /// Line style
    pub style: Option<BorderLineStyle>,
    /// Line width, 1 to 3
    pub width: Option<u8>,
    /// Line color
    pub color: Option<Color>,
}

impl BorderSide {
    /// Create a side with the given style, width and color
    pub fn new(style: BorderLineStyle, width: u8, color: Color) -> Self {
        Self {
            style: Some(style),
            width: Some(width),
            color: Some(color),
        }
    }

    /// Create a thin solid black side
    pub fn solid() -> Self {
        Self::new(BorderLineStyle::Solid, 1, Color::BLACK)
    }

    /// Check if the side carries no attributes at all
    pub fn is_absent(&self) -> bool {
        self.style.is_none() && self.width.is_none() && self.color.is_none()
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum BorderLineStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl BorderLineStyle {
    /// Parse the wire name (e.g. "SOLID"), case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SOLID" => Some(Self::Solid),
            "DASHED" => Some(Self::Dashed),
            "DOTTED" => Some(Self::Dotted),
            "DOUBLE" => Some(Self::Double),
            _ => None,
        }
    }

    /// The wire name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solid => "SOLID",
            Self::Dashed => "DASHED",
            Self::Dotted => "DOTTED",
            Self::Double => "DOUBLE",
        }
    }
}
