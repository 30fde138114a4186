//! # cellwire-core
//!
//! Core data structures for the cellwire spreadsheet client.
//!
//! This crate provides the fundamental types used throughout cellwire:
//! - [`CellAddress`], [`CellRef`] and [`CellRange`] - A1-style addressing
//! - [`Cell`] and [`CellValue`] - The addressed cell record
//! - [`Color`], [`BorderSet`], [`TextStyle`] - Cell formatting
//! - [`Sheet`] and [`SheetIndex`] - Sheets of a spreadsheet
//!
//! Nothing here performs I/O.
//!
//! ## Example
//!
//! ```rust
//! use cellwire_core::{Cell, Color};
//!
//! let cell = Cell::new("b12")
//!     .unwrap()
//!     .with_value("=SUM(A1:A2)")
//!     .with_background(Color::normalize("#FFEEDD").unwrap())
//!     .bold(true);
//!
//! assert_eq!(cell.name(), "B12");
//! assert_eq!((cell.col(), cell.row()), (1, 11));
//! ```

pub mod cell;
pub mod error;
pub mod sheet;
pub mod style;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellRange, CellRef, CellValue};
pub use error::{Error, Result};
pub use sheet::{Sheet, SheetIndex};
pub use style::{BorderLineStyle, BorderSet, BorderSide, Color, ColorInput, TextStyle};

/// Highest supported column index ("ZZZ")
pub const MAX_COLUMN: u32 = 26 + 26 * 26 + 26 * 26 * 26 - 1;
