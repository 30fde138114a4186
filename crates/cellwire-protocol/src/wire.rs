//! Typed wire objects exchanged with the spreadsheet service.
//!
//! Field names follow the service's JSON (camelCase). Optional slots are
//! skipped when empty so that "no value given" never serializes as an
//! empty value.

use cellwire_core::{BorderLineStyle, CellAddress, CellRange, Color};
use serde::{Deserialize, Serialize};

/// One cell as sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    pub user_entered_format: CellFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The value slot of a cell. Exactly one kind is present on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    NumberValue(f64),
    StringValue(String),
    BoolValue(bool),
    FormulaValue(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    pub text_format: TextFormat,
    pub background_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub font_size: u32,
    pub font_family: String,
    pub foreground_color: Color,
}

/// Border block; absent sides are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderLineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    pub values: Vec<CellData>,
}

/// Top-left anchor of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub sheet_id: i64,
    pub row_index: u32,
    pub column_index: u32,
}

impl GridCoordinate {
    pub fn new(sheet_id: i64, at: CellAddress) -> Self {
        Self {
            sheet_id,
            row_index: at.row,
            column_index: at.col,
        }
    }
}

/// A rectangle on a sheet; end indices are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: i64,
    pub start_row_index: u32,
    pub end_row_index: u32,
    pub start_column_index: u32,
    pub end_column_index: u32,
}

impl GridRange {
    /// Convert an inclusive cell range to the service's half-open form
    ///
    /// Ends saturate at `u32::MAX`, so a range touching the last index
    /// loses that final row or column.
    pub fn new(sheet_id: i64, range: CellRange) -> Self {
        Self {
            sheet_id,
            start_row_index: range.start.row,
            end_row_index: range.end.row.saturating_add(1),
            start_column_index: range.start.col,
            end_column_index: range.end.col.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
    DimensionUnspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeType {
    MergeAll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCellsRequest {
    pub rows: Vec<RowData>,
    pub fields: String,
    pub start: GridCoordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendCellsRequest {
    pub sheet_id: i64,
    pub rows: Vec<RowData>,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeCellsRequest {
    pub range: GridRange,
    pub merge_type: MergeType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmergeCellsRequest {
    pub range: GridRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertRangeRequest {
    pub range: GridRange,
    pub shift_dimension: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendDimensionRequest {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSheetRequest {
    pub properties: NewSheetProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSheetProperties {
    pub title: String,
}

/// One entry of a batch update. Serializes as `{"updateCells": {...}}` etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    UpdateCells(UpdateCellsRequest),
    AppendCells(AppendCellsRequest),
    MergeCells(MergeCellsRequest),
    UnmergeCells(UnmergeCellsRequest),
    InsertRange(InsertRangeRequest),
    AppendDimension(AppendDimensionRequest),
    AddSheet(AddSheetRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

impl BatchUpdateRequest {
    pub fn single(request: Request) -> Self {
        Self {
            requests: vec![request],
        }
    }
}

/// Body of a sheet copy to another spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySheetRequest {
    pub destination_spreadsheet_id: String,
}

/// Body of a spreadsheet creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSpreadsheetRequest {
    pub properties: NewSheetProperties,
}

/// Spreadsheet metadata, as much of it as the client reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpreadsheetMeta {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    pub title: String,
}
