//! Outbound mapping: cell model to wire objects.

use cellwire_core::{BorderSet, BorderSide, Cell, CellValue};

use crate::wire::{Border, Borders, CellData, CellFormat, ExtendedValue, RowData, TextFormat};

/// Build the wire object for one cell.
///
/// The value slot is omitted when the cell has no value, the note when
/// it has no note, and the borders block when every side is absent.
/// Text formatting and background color are always present.
pub fn encode_cell(cell: &Cell) -> CellData {
    CellData {
        user_entered_value: cell.value.as_ref().map(encode_value),
        user_entered_format: CellFormat {
            text_format: TextFormat {
                bold: cell.text.bold,
                italic: cell.text.italic,
                strikethrough: cell.text.strikethrough,
                underline: cell.text.underline,
                font_size: cell.text.size,
                font_family: cell.text.family.clone(),
                foreground_color: cell.text.color,
            },
            background_color: cell.background,
            borders: encode_borders(&cell.borders),
        },
        note: cell.note.clone(),
    }
}

/// Encode cells in the given order as one wire row.
pub fn encode_row<'a, I>(cells: I) -> RowData
where
    I: IntoIterator<Item = &'a Cell>,
{
    RowData {
        values: cells.into_iter().map(encode_cell).collect(),
    }
}

fn encode_value(value: &CellValue) -> ExtendedValue {
    match value {
        CellValue::Formula(f) => ExtendedValue::FormulaValue(f.clone()),
        CellValue::Text(s) if s.starts_with('=') => ExtendedValue::FormulaValue(s.clone()),
        CellValue::Text(s) => ExtendedValue::StringValue(s.clone()),
        CellValue::Number(n) => ExtendedValue::NumberValue(*n),
        CellValue::Bool(b) => ExtendedValue::BoolValue(*b),
    }
}

fn encode_borders(borders: &BorderSet) -> Option<Borders> {
    if borders.is_empty() {
        return None;
    }
    Some(Borders {
        top: encode_side(&borders.top),
        bottom: encode_side(&borders.bottom),
        left: encode_side(&borders.left),
        right: encode_side(&borders.right),
    })
}

fn encode_side(side: &BorderSide) -> Option<Border> {
    if side.is_absent() {
        return None;
    }
    Some(Border {
        style: side.style,
        width: side.width,
        color: side.color,
    })
}
