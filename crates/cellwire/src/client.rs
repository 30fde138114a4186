//! Spreadsheet client: turns cell edits and reads into service calls.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cellwire_core::{Cell, CellAddress, CellRange, CellRef, Sheet, SheetIndex};
use cellwire_protocol::wire::{
    BatchUpdateRequest, CopySheetRequest, CreateSpreadsheetRequest, Dimension, NewSheetProperties,
    Request,
};
use cellwire_protocol::{batch, decode_grid, parse_sheets, range_for, requests};
use serde_json::Value;

use crate::error::Result;
use crate::transport::SheetsTransport;

/// Configuration for a [`SpreadsheetClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Id of the spreadsheet all calls target.
    pub spreadsheet_id: String,
    /// Field mask for cell updates and appends. Default: "*".
    pub fields: String,
    /// First cell of a read when none is given. Default: "A1".
    pub default_range_start: String,
    /// Last cell (or column) of a read when none is given. Default: "ZZZ".
    pub default_range_end: String,
    /// Ask for formatting along with values on reads. Default: true.
    pub include_grid_data: bool,
}

impl ClientConfig {
    pub fn new<S: Into<String>>(spreadsheet_id: S) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            fields: requests::ALL_FIELDS.to_string(),
            default_range_start: "A1".to_string(),
            default_range_end: "ZZZ".to_string(),
            include_grid_data: true,
        }
    }
}

/// Reference to a sheet, by id or by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetRef {
    Id(i64),
    Title(String),
}

impl From<i64> for SheetRef {
    fn from(id: i64) -> Self {
        SheetRef::Id(id)
    }
}

impl From<&str> for SheetRef {
    fn from(title: &str) -> Self {
        SheetRef::Title(title.to_string())
    }
}

impl From<String> for SheetRef {
    fn from(title: String) -> Self {
        SheetRef::Title(title)
    }
}

impl From<&Sheet> for SheetRef {
    fn from(sheet: &Sheet) -> Self {
        SheetRef::Id(sheet.id)
    }
}

/// Result of a range read.
///
/// Holds the raw response; [`GridSnapshot::cells`] decodes it on each call.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    range: String,
    origin: CellAddress,
    response: Value,
}

impl GridSnapshot {
    /// The A1 range that was requested (e.g. `Sheet1!A1:ZZZ`)
    pub fn range(&self) -> &str {
        &self.range
    }

    /// Address of the top-left cell of the read
    pub fn origin(&self) -> CellAddress {
        self.origin
    }

    /// Decode the snapshot into cells, lazily
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        decode_grid(&self.response, self.origin)
    }

    pub fn into_response(self) -> Value {
        self.response
    }
}

/// Handle to one spreadsheet on the service.
///
/// The sheet list is fetched on first use and cached until
/// [`SpreadsheetClient::refresh_sheets`] or [`SpreadsheetClient::add_sheet`].
pub struct SpreadsheetClient<T> {
    transport: T,
    config: ClientConfig,
    sheets: Mutex<Option<SheetIndex>>,
}

impl<T: SheetsTransport> SpreadsheetClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            sheets: Mutex::new(None),
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.config.spreadsheet_id
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn cache(&self) -> MutexGuard<'_, Option<SheetIndex>> {
        self.sheets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -- Sheets --

    /// Sheets of the spreadsheet, from cache when available.
    pub fn sheets(&self) -> Result<SheetIndex> {
        if let Some(index) = self.cache().as_ref() {
            return Ok(index.clone());
        }
        self.refresh_sheets()
    }

    /// Re-fetch the sheet list and replace the cached copy.
    pub fn refresh_sheets(&self) -> Result<SheetIndex> {
        let response = self.transport.get(self.spreadsheet_id(), &[], false)?;
        let index = SheetIndex::new(parse_sheets(&response)?);
        tracing::info!(
            "Loaded {} sheets for spreadsheet {}",
            index.len(),
            self.spreadsheet_id()
        );
        *self.cache() = Some(index.clone());
        Ok(index)
    }

    /// Drop the cached sheet list; the next lookup fetches it again.
    pub fn invalidate_sheets(&self) {
        *self.cache() = None;
    }

    /// Find a sheet by id and/or title (first match wins).
    pub fn sheet(&self, id: Option<i64>, title: Option<&str>) -> Result<Sheet> {
        Ok(self.sheets()?.resolve(id, title)?.clone())
    }

    fn resolve_ref(&self, sheet: SheetRef) -> Result<Sheet> {
        match sheet {
            SheetRef::Id(id) => self.sheet(Some(id), None),
            SheetRef::Title(title) => self.sheet(None, Some(&title)),
        }
    }

    pub fn add_sheet(&self, title: &str) -> Result<Value> {
        let response = self.send(BatchUpdateRequest::single(requests::add_sheet(title)))?;
        tracing::info!("Added sheet '{title}' to spreadsheet {}", self.spreadsheet_id());
        self.invalidate_sheets();
        Ok(response)
    }

    // -- Cells --

    /// Write cells, one `updateCells` request per contiguous row segment,
    /// all in a single batch.
    pub fn update_cells<'a, I>(&self, cells: I, sheet_id: i64) -> Result<Value>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let requests = batch::update_requests(cells, sheet_id, &self.config.fields)?;
        self.send(BatchUpdateRequest { requests })
    }

    /// Append rows of cells after the last populated row.
    pub fn append<'a, R, C>(&self, rows: R, sheet_id: i64) -> Result<Value>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'a Cell>,
    {
        let request = requests::append_cells(sheet_id, rows, &self.config.fields);
        self.send(BatchUpdateRequest::single(request))
    }

    /// Read a range of a sheet.
    ///
    /// `from` and `to` default to the configured range ends ("A1" and
    /// "ZZZ"). A sheet given by id is resolved to its title first.
    pub fn get_values(
        &self,
        sheet: impl Into<SheetRef>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<GridSnapshot> {
        let title = match sheet.into() {
            SheetRef::Title(title) => title,
            id @ SheetRef::Id(_) => self.resolve_ref(id)?.title,
        };
        let from = from.unwrap_or(&self.config.default_range_start);
        let to = to.unwrap_or(&self.config.default_range_end);

        let start = CellRef::parse(from)?;
        let range = range_for(&title, from, to)?;
        let origin = CellAddress::new(start.col.unwrap_or(0), start.row.unwrap_or(0));

        tracing::debug!("Reading {range} from spreadsheet {}", self.spreadsheet_id());
        let response = self.transport.get(
            self.spreadsheet_id(),
            std::slice::from_ref(&range),
            self.config.include_grid_data,
        )?;

        Ok(GridSnapshot {
            range,
            origin,
            response,
        })
    }

    // -- Structure --

    pub fn merge_cells(&self, range: CellRange, sheet_id: i64) -> Result<Value> {
        self.send(BatchUpdateRequest::single(requests::merge_cells(
            sheet_id, range,
        )))
    }

    pub fn unmerge_cells(&self, range: CellRange, sheet_id: i64) -> Result<Value> {
        self.send(BatchUpdateRequest::single(requests::unmerge_cells(
            sheet_id, range,
        )))
    }

    /// Insert empty cells over `range`, shifting existing cells along `shift`.
    pub fn insert_range(&self, range: CellRange, shift: Dimension, sheet_id: i64) -> Result<Value> {
        self.send(BatchUpdateRequest::single(requests::insert_range(
            sheet_id, range, shift,
        )))
    }

    pub fn append_dimension(
        &self,
        dimension: Dimension,
        sheet_id: i64,
        length: u32,
    ) -> Result<Value> {
        self.send(BatchUpdateRequest::single(requests::append_dimension(
            sheet_id, dimension, length,
        )))
    }

    /// Send a prepared batch as-is.
    pub fn batch_update(&self, requests: Vec<Request>) -> Result<Value> {
        self.send(BatchUpdateRequest { requests })
    }

    fn send(&self, body: BatchUpdateRequest) -> Result<Value> {
        tracing::debug!(
            "Sending {} requests to spreadsheet {}",
            body.requests.len(),
            self.spreadsheet_id()
        );
        self.transport.batch_update(self.spreadsheet_id(), &body)
    }

    // -- Spreadsheets --

    /// Copy one sheet into another spreadsheet.
    pub fn copy_to_spreadsheet(
        &self,
        destination_id: &str,
        sheet: impl Into<SheetRef>,
    ) -> Result<Value> {
        let sheet_id = match sheet.into() {
            SheetRef::Id(id) => id,
            title @ SheetRef::Title(_) => self.resolve_ref(title)?.id,
        };
        self.transport.copy_to(
            self.spreadsheet_id(),
            sheet_id,
            &CopySheetRequest {
                destination_spreadsheet_id: destination_id.to_string(),
            },
        )
    }

    /// Copy every sheet into another spreadsheet, in sheet order.
    pub fn copy_all_to_spreadsheet(&self, destination_id: &str) -> Result<Vec<Value>> {
        self.sheets()?
            .iter()
            .map(|sheet| self.copy_to_spreadsheet(destination_id, sheet))
            .collect()
    }

    /// Create a new spreadsheet with the given title.
    pub fn create_spreadsheet(&self, title: &str) -> Result<Value> {
        let response = self.transport.create(&CreateSpreadsheetRequest {
            properties: NewSheetProperties {
                title: title.to_string(),
            },
        })?;
        tracing::info!("Created spreadsheet '{title}'");
        Ok(response)
    }
}
