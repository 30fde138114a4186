//! Wire protocol for the cellwire spreadsheet client.
//!
//! The service speaks JSON: cells are nested, mostly-optional objects
//! grouped into rows, and edits are sent as batches of typed requests.
//! This crate holds:
//!
//! - [`wire`]: serde types for the outbound objects and requests
//! - [`encode`]: cell model to wire cell objects
//! - [`decode`]: grid snapshots back to addressed cells
//! - [`search`]: key search over nested JSON, used by the decoder
//! - [`batch`]: coalescing edited cells into row segments
//! - [`requests`]: builders for the remaining batch-update requests
//!
//! # Example
//!
//! ```rust
//! use cellwire_core::Cell;
//! use cellwire_protocol::{batch, ALL_FIELDS};
//!
//! let cells = vec![
//!     Cell::new("A1").unwrap().with_value("name"),
//!     Cell::new("B1").unwrap().with_value(42),
//!     Cell::new("D1").unwrap().with_value("=B1*2"),
//! ];
//! let requests = batch::update_requests(&cells, 0, ALL_FIELDS).unwrap();
//! assert_eq!(requests.len(), 2);
//! ```

pub mod batch;
pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod requests;
pub mod search;
pub mod wire;

pub use batch::{coalesce, RowSegment};
pub use color::color_from_literal;
pub use decode::{decode_cell, decode_grid};
pub use encode::{encode_cell, encode_row};
pub use error::{Error, Result};
pub use requests::{parse_sheets, range_for, ALL_FIELDS};
pub use wire::{BatchUpdateRequest, CellData, Dimension, Request, RowData};
