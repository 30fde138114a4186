//! Builders for batch-update requests and readers for metadata responses.

use cellwire_core::{Cell, CellRange, CellRef, Sheet};
use serde::Deserialize;
use serde_json::Value;

use crate::encode::encode_row;
use crate::error::{Error, Result};
use crate::wire::{
    AddSheetRequest, AppendCellsRequest, AppendDimensionRequest, Dimension, GridRange,
    InsertRangeRequest, MergeCellsRequest, MergeType, NewSheetProperties, Request,
    SpreadsheetMeta, UnmergeCellsRequest,
};

/// Field mask that replaces every cell field.
pub const ALL_FIELDS: &str = "*";

/// Append rows of cells after the last populated row of a sheet.
///
/// The cells' own addresses are ignored; position comes from the
/// order of `rows` and of the cells within each row.
pub fn append_cells<'a, R, C>(sheet_id: i64, rows: R, fields: &str) -> Request
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = &'a Cell>,
{
    Request::AppendCells(AppendCellsRequest {
        sheet_id,
        rows: rows.into_iter().map(encode_row).collect(),
        fields: fields.to_string(),
    })
}

pub fn merge_cells(sheet_id: i64, range: CellRange) -> Request {
    Request::MergeCells(MergeCellsRequest {
        range: GridRange::new(sheet_id, range),
        merge_type: MergeType::MergeAll,
    })
}

pub fn unmerge_cells(sheet_id: i64, range: CellRange) -> Request {
    Request::UnmergeCells(UnmergeCellsRequest {
        range: GridRange::new(sheet_id, range),
    })
}

/// Insert empty cells over `range`, shifting existing ones along `shift`.
pub fn insert_range(sheet_id: i64, range: CellRange, shift: Dimension) -> Request {
    Request::InsertRange(InsertRangeRequest {
        range: GridRange::new(sheet_id, range),
        shift_dimension: shift,
    })
}

pub fn append_dimension(sheet_id: i64, dimension: Dimension, length: u32) -> Request {
    Request::AppendDimension(AppendDimensionRequest {
        sheet_id,
        dimension,
        length,
    })
}

pub fn add_sheet<S: Into<String>>(title: S) -> Request {
    Request::AddSheet(AddSheetRequest {
        properties: NewSheetProperties {
            title: title.into(),
        },
    })
}

/// Read the sheet list out of a spreadsheet metadata response.
pub fn parse_sheets(response: &Value) -> Result<Vec<Sheet>> {
    if !response.is_object() {
        return Err(Error::UnexpectedShape(format!(
            "spreadsheet metadata must be an object, got {response}"
        )));
    }
    let meta = SpreadsheetMeta::deserialize(response)?;
    Ok(meta
        .sheets
        .into_iter()
        .map(|entry| Sheet::new(entry.properties.sheet_id, entry.properties.title))
        .collect())
}

/// Build an A1 range string such as `Sheet1!A1:ZZZ`.
///
/// Both ends are validated and upper-cased; either may be a pure
/// column or pure row reference. Titles that are not plain
/// identifiers are quoted.
pub fn range_for(sheet_title: &str, from: &str, to: &str) -> Result<String> {
    let from = CellRef::parse(from)?;
    let to = CellRef::parse(to)?;
    Ok(format!("{}!{}:{}", quote_title(sheet_title), from, to))
}

fn quote_title(title: &str) -> String {
    if !title.is_empty() && title.chars().all(|c| c.is_alphanumeric() || c == '_') {
        title.to_string()
    } else {
        format!("'{}'", title.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_sheets() {
        let response = json!({
            "spreadsheetId": "abc",
            "sheets": [
                {"properties": {"sheetId": 0, "title": "Sheet1", "index": 0}},
                {"properties": {"sheetId": 91, "title": "Totals", "index": 1}}
            ]
        });
        assert_eq!(
            parse_sheets(&response).unwrap(),
            vec![Sheet::new(0, "Sheet1"), Sheet::new(91, "Totals")]
        );
    }

    #[test]
    fn test_parse_sheets_bad_shape() {
        assert!(matches!(parse_sheets(&json!([])), Err(Error::UnexpectedShape(_))));
        assert!(matches!(
            parse_sheets(&json!({"sheets": [{"properties": {}}]})),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_range_for() {
        assert_eq!(range_for("Sheet1", "a1", "zzz").unwrap(), "Sheet1!A1:ZZZ");
        assert_eq!(range_for("My Sheet", "B2", "C9").unwrap(), "'My Sheet'!B2:C9");
        assert_eq!(range_for("Bob's", "A1", "B1").unwrap(), "'Bob''s'!A1:B1");
        assert!(range_for("Sheet1", "A1", "A-1").is_err());
    }

    #[test]
    fn test_append_cells_rows() {
        let a = Cell::new("Z9").unwrap().with_value("a");
        let b = Cell::new("A1").unwrap().with_value("b");
        let request = append_cells(4, [vec![&a, &b], vec![&b]], ALL_FIELDS);
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["appendCells"]["sheetId"], json!(4));
        assert_eq!(v["appendCells"]["rows"].as_array().unwrap().len(), 2);
        assert_eq!(
            v["appendCells"]["rows"][0]["values"][0]["userEnteredValue"],
            json!({"stringValue": "a"})
        );
    }

    #[test]
    fn test_range_requests() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(
            serde_json::to_value(merge_cells(0, range)).unwrap()["mergeCells"]["mergeType"],
            json!("MERGE_ALL")
        );
        assert_eq!(
            serde_json::to_value(unmerge_cells(0, range)).unwrap()["unmergeCells"]["range"]
                ["endColumnIndex"],
            json!(2)
        );
        assert_eq!(
            serde_json::to_value(insert_range(0, range, Dimension::Columns)).unwrap()
                ["insertRange"]["shiftDimension"],
            json!("COLUMNS")
        );
        assert_eq!(
            serde_json::to_value(add_sheet("New")).unwrap(),
            json!({"addSheet": {"properties": {"title": "New"}}})
        );
    }
}
