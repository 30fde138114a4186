//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`], [`CellRef`] and [`CellRange`] - A1-style addressing
//! - [`CellValue`] - The value stored in a cell
//! - [`Cell`] - Complete cell record including value and formatting

mod address;
mod data;
mod value;

pub use address::{
    column_to_letters, decode, encode, letters_to_column, CellAddress, CellRange, CellRef,
};
pub use data::Cell;
pub use value::CellValue;
