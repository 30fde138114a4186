//! Error types for cellwire-protocol

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or reading wire payloads
#[derive(Debug, Error)]
pub enum Error {
    /// Address, color or sheet error from the core model
    #[error(transparent)]
    Core(#[from] cellwire_core::Error),

    /// An update was requested for zero cells
    #[error("Cannot build an update from an empty batch of cells")]
    EmptyBatch,

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response did not have the expected structure
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}
