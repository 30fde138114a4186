//! Spreadsheet client that writes and reads cells by A1 address.
//!
//! Cells are built with [`Cell`], grouped into as few `updateCells`
//! requests as possible and sent as one batch. Reads come back as a
//! [`GridSnapshot`] that decodes into addressed cells on demand.
//!
//! # Architecture
//!
//! ```text
//! Your Rust code
//!     └── SpreadsheetClient (this crate)
//!           ├── cellwire-protocol: wire types, coalescing, grid decode
//!           └── SheetsTransport (yours): auth + HTTP to the service
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use cellwire::prelude::*;
//!
//! fn run<T: SheetsTransport>(transport: T) -> cellwire::Result<()> {
//!     let client = SpreadsheetClient::new(transport, ClientConfig::new("spreadsheet-id"));
//!     let sheet = client.sheet(None, Some("Sheet1"))?;
//!
//!     let cells = vec![
//!         Cell::new("A1")?.with_value("Total").bold(true),
//!         Cell::new("B1")?.with_value(42),
//!         Cell::new("C1")?.with_value("=B1*2").with_background(Color::from_hex("#ffcc00")?),
//!     ];
//!     client.update_cells(&cells, sheet.id)?;
//!
//!     for cell in client.get_values(sheet.title.as_str(), None, None)?.cells() {
//!         println!("{} = {:?}", cell.name(), cell.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod prelude;
pub mod transport;

pub use cellwire_core::{
    BorderLineStyle, BorderSet, BorderSide, Cell, CellAddress, CellRange, CellRef, CellValue,
    Color, Sheet, SheetIndex, TextStyle,
};
pub use cellwire_protocol::wire::Dimension;
pub use client::{ClientConfig, GridSnapshot, SheetRef, SpreadsheetClient};
pub use error::{ClientError, Result};
pub use transport::SheetsTransport;
