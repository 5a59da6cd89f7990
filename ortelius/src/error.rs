//! Error types used by the crate.

use thiserror::Error;

/// Ortelius error type.
#[derive(Debug, Error)]
pub enum OrteliusError {
    /// I/O error (network transport failed).
    #[error("failed to load data")]
    Io,
    /// The annotation service returned a payload that does not match the
    /// expected nested-array shape.
    #[error("malformed annotation response")]
    MalformedResponse,
    /// The annotation service had no candidate for the requested title.
    #[error("item not found")]
    NotFound,
    /// A marker index that does not exist in the registry.
    #[error("marker index {0} is out of range")]
    OutOfRange(usize),
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
}

impl From<reqwest::Error> for OrteliusError {
    fn from(_value: reqwest::Error) -> Self {
        Self::Io
    }
}

impl From<serde_json::Error> for OrteliusError {
    fn from(_value: serde_json::Error) -> Self {
        Self::MalformedResponse
    }
}
