//! Store-specific error types
//!
//! Read failures (`Missing`, `Empty`, `Malformed`) are degraded conditions: the
//! caller keeps running with an empty collection. `SaveFailed` is reported after
//! the in-memory change has been rolled back. `Validation` names the blank field
//! of a tip being created.

use super::types::{TipField, TipId};
use std::path::PathBuf;
use thiserror::Error;

/// Tip store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing record does not exist
    #[error("Tips file not found: {}", .0.display())]
    Missing(PathBuf),

    /// The backing record exists but has no content
    #[error("Tips file is empty: {}", .0.display())]
    Empty(PathBuf),

    /// The backing record could not be parsed as a tip document
    #[error("Invalid tips file: {0}")]
    Malformed(String),

    /// The collection could not be written back
    #[error("Failed to save tips: {0}")]
    SaveFailed(String),

    /// A required field of a new tip was blank
    #[error("{0} cannot be empty")]
    Validation(TipField),

    /// The highest id in the collection leaves no room for another
    #[error("No tip id left after #{0}")]
    IdsExhausted(TipId),

    /// No tip with the requested id
    #[error("Tip #{0} not found")]
    TipNotFound(TipId),

    /// The backing record exists but could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether the backing record holds no tips at all (missing or empty)
    ///
    /// Only then is it safe to write a fresh collection over it.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Missing(_) | Self::Empty(_))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
