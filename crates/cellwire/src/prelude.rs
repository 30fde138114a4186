//! Commonly used types, for glob import.

pub use crate::client::{ClientConfig, GridSnapshot, SheetRef, SpreadsheetClient};
pub use crate::error::{ClientError, Result};
pub use crate::transport::SheetsTransport;
pub use cellwire_core::{BorderSet, BorderSide, Cell, CellAddress, CellRange, CellValue, Color};
pub use cellwire_protocol::wire::Dimension;
