//! Menu error types

use thiserror::Error;

/// Errors from resolving menu input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// Input did not match any menu option; the caller re-prompts
    #[error("Invalid choice '{0}'. Try typing part of the menu option.")]
    UnrecognizedChoice(String),
}
