//! Tipster - tips & tricks served in the terminal
//!
//! This library provides the tip store, the no-repeat session sampler, the
//! query functions and the interactive session behind the `tipster` binary.

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod logging;
pub mod menu;
pub mod output;
pub mod query;
pub mod session;
pub mod store;
pub mod supervisor;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TipsterError {
    /// Tip store error
    #[error(transparent)]
    Store(#[from] store::StoreError),
    /// Reading user input failed
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Export error
    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LoggingError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
