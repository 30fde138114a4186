//! Error types for cellwire-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellwire-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Textual coordinate could not be parsed
    #[error("Malformed address: {0}")]
    MalformedAddress(String),

    /// Column index needs more than three letters
    #[error("Column index {0} out of bounds (max: {max})", max = crate::MAX_COLUMN)]
    ColumnOutOfBounds(u32),

    /// Color literal is not a hex string, byte triple or fractional map
    #[error("Unsupported color format: {0}")]
    UnsupportedColorFormat(String),

    /// Sheet lookup was given neither an id nor a title
    #[error("Sheet lookup needs an id or a title")]
    MissingSelector,

    /// No sheet matched the given id/title
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedAddress(msg.into())
    }
}
