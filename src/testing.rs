//! Testing utilities for tipster
//!
//! Fixture tips and a `TempStore` wrapper that places a tips file in a
//! temporary directory removed on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::store::{Tip, TipDocument};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small collection covering several categories, ids ascending
#[must_use]
pub fn sample_tips() -> Vec<Tip> {
    vec![
        Tip::new(1, "Generate unit tests", "Ask for tests covering edge cases of the selected function", "Testing"),
        Tip::new(2, "Never paste secrets", "Keep API keys and passwords out of prompts and chat history", "Security"),
        Tip::new(3, "Slash commands", "Type / in chat to see the available commands", "Chat Features"),
        Tip::new(4, "Review before commit", "Read generated code as carefully as a colleague's pull request", "Best Practices"),
        Tip::new(5, "Reproduce first", "Write a failing test before asking for a fix", "Debugging"),
        Tip::new(6, "Scan dependencies", "Check suggested packages for known vulnerabilities", "Security"),
        Tip::new(7, "Test data builders", "Let the assistant scaffold fixtures for large test inputs", "Testing"),
    ]
}

/// A tips file inside a temporary directory
///
/// The directory and everything in it is removed when the wrapper is dropped.
///
/// # Examples
/// ```ignore
/// let temp = TempStore::with_tips(&sample_tips());
/// let (store, warning) = TipStore::open(temp.path());
/// assert!(warning.is_none());
/// ```
pub struct TempStore {
    _dir: TempDir,
    path: PathBuf,
}

impl TempStore {
    /// Create a temporary directory with no tips file in it yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tips.json");
        Self { _dir: dir, path }
    }

    /// Create a tips file with the given raw contents
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_raw(contents: &str) -> Self {
        let temp = Self::empty();
        fs::write(&temp.path, contents).expect("Failed to write tips file");
        temp
    }

    /// Create a tips file holding `tips`
    ///
    /// # Panics
    /// Panics if serialization or writing fails.
    #[must_use]
    pub fn with_tips(tips: &[Tip]) -> Self {
        let json = serde_json::to_string_pretty(&TipDocument::new(tips.to_vec()))
            .expect("Failed to serialize tips");
        Self::with_raw(&json)
    }

    /// Path of the tips file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
