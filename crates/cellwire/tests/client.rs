//! Client tests against an in-memory transport.
//!
//! `RecordingTransport` answers metadata reads with a fixed sheet list,
//! range reads with a canned grid, and keeps every body it was sent.

use std::cell::{Cell as Counter, RefCell};

use cellwire::prelude::*;
use cellwire::{CellRef, ClientError};
use cellwire_protocol::wire::{BatchUpdateRequest, CopySheetRequest, CreateSpreadsheetRequest};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Metadata,
    Read(Vec<String>, bool),
    Batch(Value),
    Copy(i64, String),
    Create(String),
}

struct RecordingTransport {
    calls: RefCell<Vec<Call>>,
    sheets: RefCell<Value>,
    grid: Value,
    fail_batches: Counter<bool>,
}

impl RecordingTransport {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            sheets: RefCell::new(json!([
                {"properties": {"sheetId": 0, "title": "Sheet1", "index": 0}},
                {"properties": {"sheetId": 77, "title": "Totals", "index": 1}}
            ])),
            grid: json!({
                "spreadsheetId": "sheet-id",
                "sheets": [{
                    "properties": {"sheetId": 0, "title": "Sheet1"},
                    "data": [{
                        "rowData": [
                            {"values": [
                                {
                                    "userEnteredValue": {"stringValue": "name"},
                                    "userEnteredFormat": {"textFormat": {"bold": true}}
                                },
                                {"userEnteredValue": {"numberValue": 0}}
                            ]},
                            {},
                            {"values": [
                                {"userEnteredValue": {"formulaValue": "=B1*2"}, "formattedValue": "0"}
                            ]}
                        ]
                    }]
                }]
            }),
            fail_batches: Counter::new(false),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn metadata_reads(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == Call::Metadata)
            .count()
    }

    fn batches(&self) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Batch(body) => Some(body.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SheetsTransport for RecordingTransport {
    fn get(&self, _id: &str, ranges: &[String], include_grid_data: bool) -> cellwire::Result<Value> {
        if ranges.is_empty() {
            self.calls.borrow_mut().push(Call::Metadata);
            return Ok(json!({"sheets": self.sheets.borrow().clone()}));
        }
        self.calls
            .borrow_mut()
            .push(Call::Read(ranges.to_vec(), include_grid_data));
        Ok(self.grid.clone())
    }

    fn batch_update(&self, _id: &str, body: &BatchUpdateRequest) -> cellwire::Result<Value> {
        if self.fail_batches.get() {
            return Err(ClientError::Transport("quota exceeded".into()));
        }
        let body = serde_json::to_value(body)?;
        self.calls.borrow_mut().push(Call::Batch(body));
        Ok(json!({"replies": []}))
    }

    fn copy_to(&self, _id: &str, sheet_id: i64, body: &CopySheetRequest) -> cellwire::Result<Value> {
        self.calls.borrow_mut().push(Call::Copy(
            sheet_id,
            body.destination_spreadsheet_id.clone(),
        ));
        Ok(json!({"sheetId": sheet_id + 1000}))
    }

    fn create(&self, body: &CreateSpreadsheetRequest) -> cellwire::Result<Value> {
        self.calls
            .borrow_mut()
            .push(Call::Create(body.properties.title.clone()));
        Ok(json!({"spreadsheetId": "new-id"}))
    }
}

fn client(transport: &RecordingTransport) -> SpreadsheetClient<&RecordingTransport> {
    SpreadsheetClient::new(transport, ClientConfig::new("sheet-id"))
}

#[test]
fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.fields, "*");
    assert_eq!(config.default_range_start, "A1");
    assert_eq!(config.default_range_end, "ZZZ");
    assert!(config.include_grid_data);
}

#[test]
fn test_sheet_list_is_cached() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    assert_eq!(client.sheets().unwrap().len(), 2);
    assert_eq!(client.sheet(Some(77), None).unwrap().title, "Totals");
    assert_eq!(client.sheet(None, Some("Sheet1")).unwrap().id, 0);
    assert_eq!(transport.metadata_reads(), 1);

    transport
        .sheets
        .borrow_mut()
        .as_array_mut()
        .unwrap()
        .push(json!({"properties": {"sheetId": 5, "title": "Late"}}));
    assert!(client.sheet(None, Some("Late")).is_err());

    client.refresh_sheets().unwrap();
    assert_eq!(client.sheet(None, Some("Late")).unwrap().id, 5);
    assert_eq!(transport.metadata_reads(), 2);
}

#[test]
fn test_sheet_lookup_errors() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    assert!(matches!(
        client.sheet(None, None),
        Err(ClientError::Core(cellwire_core::Error::MissingSelector))
    ));
    assert!(matches!(
        client.sheet(Some(404), Some("Nope")),
        Err(ClientError::Core(cellwire_core::Error::SheetNotFound(_)))
    ));
    // Either selector may match
    assert_eq!(client.sheet(Some(404), Some("Totals")).unwrap().id, 77);
}

#[test]
fn test_add_sheet_invalidates_cache() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    client.sheets().unwrap();
    client.add_sheet("Extra").unwrap();
    client.sheets().unwrap();

    assert_eq!(transport.metadata_reads(), 2);
    assert_eq!(
        transport.batches(),
        vec![json!({"requests": [{"addSheet": {"properties": {"title": "Extra"}}}]})]
    );
}

#[test]
fn test_update_cells_single_batch() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let cells: Vec<Cell> = ["A2", "D1", "B1", "A1"]
        .iter()
        .map(|a| Cell::new(a).unwrap().with_value(*a))
        .collect();
    client.update_cells(&cells, 77).unwrap();

    let batches = transport.batches();
    assert_eq!(batches.len(), 1);
    let requests = batches[0]["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 3);

    let starts: Vec<Value> = requests
        .iter()
        .map(|r| r["updateCells"]["start"].clone())
        .collect();
    assert_eq!(
        starts,
        vec![
            json!({"sheetId": 77, "rowIndex": 0, "columnIndex": 0}),
            json!({"sheetId": 77, "rowIndex": 0, "columnIndex": 3}),
            json!({"sheetId": 77, "rowIndex": 1, "columnIndex": 0}),
        ]
    );
    assert_eq!(
        requests[0]["updateCells"]["rows"][0]["values"][1]["userEnteredValue"],
        json!({"stringValue": "B1"})
    );
    assert_eq!(requests[0]["updateCells"]["fields"], json!("*"));
}

#[test]
fn test_update_cells_empty() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let result = client.update_cells(&Vec::<Cell>::new(), 0);
    assert!(matches!(
        result,
        Err(ClientError::Protocol(cellwire_protocol::Error::EmptyBatch))
    ));
    assert!(transport.calls().is_empty());
}

#[test]
fn test_transport_errors_propagate() {
    let transport = RecordingTransport::new();
    transport.fail_batches.set(true);
    let client = client(&transport);

    let cell = Cell::new("A1").unwrap().with_value(1);
    match client.update_cells([&cell], 0) {
        Err(ClientError::Transport(msg)) => assert_eq!(msg, "quota exceeded"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_get_values_decodes_grid() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let snapshot = client.get_values("Sheet1", None, None).unwrap();
    assert_eq!(snapshot.range(), "Sheet1!A1:ZZZ");
    assert_eq!(
        transport.calls(),
        vec![Call::Read(vec!["Sheet1!A1:ZZZ".into()], true)]
    );

    let cells: Vec<Cell> = snapshot.cells().collect();
    let names: Vec<String> = cells.iter().map(Cell::name).collect();
    assert_eq!(names, vec!["A1", "B1", "A3"]);

    assert_eq!(cells[0].value, Some(CellValue::Text("name".into())));
    assert!(cells[0].text.bold);
    assert_eq!(cells[1].value, Some(CellValue::Number(0.0)));
    assert_eq!(cells[2].value, Some(CellValue::Formula("=B1*2".into())));
    assert_eq!(cells[2].formatted_value.as_deref(), Some("0"));

    // Decoding is repeatable
    assert_eq!(snapshot.cells().count(), 3);
}

#[test]
fn test_get_values_by_id_and_offset() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let snapshot = client.get_values(77_i64, Some("c5"), Some("D")).unwrap();
    assert_eq!(snapshot.range(), "Totals!C5:D");
    assert_eq!(snapshot.origin(), CellAddress::new(2, 4));

    let names: Vec<String> = snapshot.cells().map(|c| c.name()).collect();
    assert_eq!(names, vec!["C5", "D5", "C7"]);
}

#[test]
fn test_get_values_column_only_start() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let snapshot = client.get_values("Sheet1", Some("B"), Some("C")).unwrap();
    assert_eq!(snapshot.origin(), CellAddress::new(1, 0));
    assert_eq!(CellRef::parse("B").unwrap().row, None);
}

#[test]
fn test_get_values_bad_range() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    assert!(matches!(
        client.get_values("Sheet1", Some("A0"), None),
        Err(ClientError::Core(cellwire_core::Error::MalformedAddress(_)))
    ));
    assert!(transport.calls().is_empty());
}

#[test]
fn test_append_rows() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let a = Cell::new("A1").unwrap().with_value("x");
    let b = Cell::new("A1").unwrap().with_value(true);
    client.append([vec![&a, &b], vec![&a]], 0).unwrap();

    let batch = &transport.batches()[0];
    let rows = batch["requests"][0]["appendCells"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0]["values"][1]["userEnteredValue"],
        json!({"boolValue": true})
    );
}

#[test]
fn test_structure_requests() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let range = CellRange::parse("B2:C4").unwrap();
    client.merge_cells(range, 0).unwrap();
    client.unmerge_cells(range, 0).unwrap();
    client.insert_range(range, Dimension::Rows, 0).unwrap();
    client.append_dimension(Dimension::Columns, 0, 10).unwrap();

    let batches = transport.batches();
    assert_eq!(
        batches[0]["requests"][0]["mergeCells"],
        json!({
            "range": {
                "sheetId": 0,
                "startRowIndex": 1,
                "endRowIndex": 4,
                "startColumnIndex": 1,
                "endColumnIndex": 3
            },
            "mergeType": "MERGE_ALL"
        })
    );
    assert!(batches[1]["requests"][0].get("unmergeCells").is_some());
    assert_eq!(
        batches[2]["requests"][0]["insertRange"]["shiftDimension"],
        json!("ROWS")
    );
    assert_eq!(
        batches[3]["requests"][0]["appendDimension"],
        json!({"sheetId": 0, "dimension": "COLUMNS", "length": 10})
    );
}

#[test]
fn test_copy_by_title_and_id() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    client.copy_to_spreadsheet("dest", "Totals").unwrap();
    client.copy_to_spreadsheet("dest", 0_i64).unwrap();

    let copies: Vec<Call> = transport
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Copy(..)))
        .collect();
    assert_eq!(
        copies,
        vec![Call::Copy(77, "dest".into()), Call::Copy(0, "dest".into())]
    );
}

#[test]
fn test_copy_all_in_sheet_order() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let replies = client.copy_all_to_spreadsheet("dest").unwrap();
    assert_eq!(replies, vec![json!({"sheetId": 1000}), json!({"sheetId": 1077})]);
    assert_eq!(
        transport.calls(),
        vec![
            Call::Metadata,
            Call::Copy(0, "dest".into()),
            Call::Copy(77, "dest".into())
        ]
    );
}

#[test]
fn test_create_spreadsheet() {
    let transport = RecordingTransport::new();
    let client = client(&transport);

    let reply = client.create_spreadsheet("Budget").unwrap();
    assert_eq!(reply["spreadsheetId"], json!("new-id"));
    assert_eq!(transport.calls(), vec![Call::Create("Budget".into())]);
}
