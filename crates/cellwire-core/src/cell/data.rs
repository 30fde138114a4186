//! The addressed cell record

use super::{CellAddress, CellValue};
use crate::error::Result;
use crate::style::{BorderSet, Color, TextStyle};

/// A cell: its address, value, note and formatting
///
/// Built by callers for writes, or reconstructed from a grid snapshot
/// for reads. The address is stored numerically; [`Cell::name`] derives
/// the upper-case A1 text from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub address: CellAddress,
    /// `None` means "leave the value alone", not "write an empty value"
    pub value: Option<CellValue>,
    pub note: Option<String>,
    pub background: Color,
    pub text: TextStyle,
    pub borders: BorderSet,
    /// Display value echoed back by the service; never written
    pub formatted_value: Option<String>,
}

impl Cell {
    /// Create an empty cell at an A1-style address (case-insensitive)
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::at(CellAddress::parse(name)?))
    }

    /// Create an empty cell at a numeric address
    pub fn at(address: CellAddress) -> Self {
        Self {
            address,
            value: None,
            note: None,
            background: Color::WHITE,
            text: TextStyle::default(),
            borders: BorderSet::default(),
            formatted_value: None,
        }
    }

    /// Upper-case A1 name of the cell
    pub fn name(&self) -> String {
        self.address.to_string()
    }

    /// 0-based column index
    pub fn col(&self) -> u32 {
        self.address.col
    }

    /// 0-based row index
    pub fn row(&self) -> u32 {
        self.address.row
    }

    pub fn with_value(mut self, value: impl Into<CellValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.text.color = color;
        self
    }

    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.text.family = family.into();
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.text.size = size;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.text.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.text.italic = italic;
        self
    }

    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.text.strikethrough = strikethrough;
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.text.underline = underline;
        self
    }

    pub fn with_borders(mut self, borders: BorderSet) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_formatted_value<S: Into<String>>(mut self, formatted: S) -> Self {
        self.formatted_value = Some(formatted.into());
        self
    }
}
