//! The seam between the client and the remote spreadsheet service.
//!
//! Authentication, HTTP, batching limits and retries all live behind
//! [`SheetsTransport`]; the client only builds typed bodies and reads
//! JSON responses.

use cellwire_protocol::wire::{BatchUpdateRequest, CopySheetRequest, CreateSpreadsheetRequest};
use serde_json::Value;

use crate::error::Result;

/// Calls the spreadsheet service makes available.
///
/// Implementations report failures as [`crate::ClientError::Transport`].
pub trait SheetsTransport {
    /// Fetch spreadsheet metadata, plus grid data for `ranges` when
    /// `include_grid_data` is set.
    fn get(&self, spreadsheet_id: &str, ranges: &[String], include_grid_data: bool)
        -> Result<Value>;

    /// Apply a batch of requests atomically.
    fn batch_update(&self, spreadsheet_id: &str, body: &BatchUpdateRequest) -> Result<Value>;

    /// Copy one sheet into another spreadsheet.
    fn copy_to(&self, spreadsheet_id: &str, sheet_id: i64, body: &CopySheetRequest)
        -> Result<Value>;

    /// Create a new spreadsheet.
    fn create(&self, body: &CreateSpreadsheetRequest) -> Result<Value>;
}

impl<T: SheetsTransport + ?Sized> SheetsTransport for &T {
    fn get(
        &self,
        spreadsheet_id: &str,
        ranges: &[String],
        include_grid_data: bool,
    ) -> Result<Value> {
        (**self).get(spreadsheet_id, ranges, include_grid_data)
    }

    fn batch_update(&self, spreadsheet_id: &str, body: &BatchUpdateRequest) -> Result<Value> {
        (**self).batch_update(spreadsheet_id, body)
    }

    fn copy_to(
        &self,
        spreadsheet_id: &str,
        sheet_id: i64,
        body: &CopySheetRequest,
    ) -> Result<Value> {
        (**self).copy_to(spreadsheet_id, sheet_id, body)
    }

    fn create(&self, body: &CreateSpreadsheetRequest) -> Result<Value> {
        (**self).create(body)
    }
}
