//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`TextStyle`] - Font and text settings
//! - [`BorderSet`] - Cell borders
//! - [`Color`] - Color representation and normalization

mod border;
mod color;
mod font;

pub use border::{BorderLineStyle, BorderSet, BorderSide};
pub use color::{Color, ColorInput};
pub use font::TextStyle;
