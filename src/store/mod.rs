//! Tip store
//!
//! Owns the tip collection and its backing record, a JSON document of the form
//! `{"tips": [...]}`. The record is only ever read and written whole.
//!
//! # Guarantees
//!
//! - Ids are assigned as `max(existing) + 1` (or `1` for an empty collection)
//!   and never reassigned.
//! - Memory and disk never diverge: a change whose save fails is rolled back.
//! - Saves are atomic (temporary sibling + rename) and run under a write guard
//!   that shutdown paths can wait on.
//!
//! # Examples
//!
//! ```no_run
//! use tipster::store::{NewTip, TipStore};
//!
//! let (mut store, warning) = TipStore::open("tips.json");
//! if let Some(err) = warning {
//!     eprintln!("{err}");
//! }
//!
//! let tip = store.create(NewTip::new("Pin tabs", "Keep files open as context", "Editor Tips")).unwrap();
//! println!("Added tip #{}", tip.id);
//! ```

pub mod atomic;
pub mod error;
pub mod types;

pub use error::StoreError;
pub use types::{NewTip, Tip, TipDocument, TipField, TipId, next_id};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// File-backed tip collection
pub struct TipStore {
    path: PathBuf,
    tips: Vec<Tip>,
    write_guard: Arc<Mutex<()>>,
}

impl TipStore {
    /// Create an empty store bound to `path` without touching the filesystem
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            tips: Vec::new(),
            write_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Create a store bound to `path` and load it
    ///
    /// Load failures are not fatal: the store starts empty and the error is
    /// handed back so the caller can warn about it.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> (Self, Option<StoreError>) {
        let mut store = Self::new(path);
        let warning = store.load().err();
        (store, warning)
    }

    /// Read the backing record, replacing the in-memory collection
    ///
    /// On failure the collection is left empty.
    ///
    /// # Errors
    ///
    /// - `StoreError::Missing` if the record does not exist
    /// - `StoreError::Empty` if it has no content
    /// - `StoreError::Malformed` if it is not a valid tip document
    /// - `StoreError::Io` if it exists but cannot be read
    pub fn load(&mut self) -> Result<usize, StoreError> {
        self.tips.clear();
        let document = read_document(&self.path).inspect_err(|err| {
            tracing::warn!(path = %self.path.display(), "Couldn't load tips: {err}");
        })?;
        self.tips = document.tips;
        tracing::debug!(path = %self.path.display(), count = self.tips.len(), "Loaded tips");
        Ok(self.tips.len())
    }

    /// Write the whole collection over the backing record
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SaveFailed` if serialization or the atomic write fails.
    /// The previous record is left intact in that case.
    pub fn save(&self) -> Result<(), StoreError> {
        let document = TipDocument::new(self.tips.clone());
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::SaveFailed(e.to_string()))?;

        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        atomic::write_atomic(&self.path, json.as_bytes()).map_err(|e| {
            tracing::error!(path = %self.path.display(), "Couldn't save tips: {e}");
            StoreError::SaveFailed(e.to_string())
        })?;
        tracing::debug!(path = %self.path.display(), count = self.tips.len(), "Saved tips");
        Ok(())
    }

    /// Validate, append and persist a new tip
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` naming the first blank field; nothing changes
    /// - `StoreError::IdsExhausted` if the highest id is `TipId::MAX`; nothing changes
    /// - `StoreError::SaveFailed` if persisting fails; the append is reverted
    pub fn create(&mut self, new_tip: NewTip) -> Result<Tip, StoreError> {
        new_tip.validate().map_err(StoreError::Validation)?;

        let id = next_id(&self.tips).ok_or(StoreError::IdsExhausted(TipId::MAX))?;
        let tip = new_tip.into_tip(id);
        self.tips.push(tip.clone());

        if let Err(err) = self.save() {
            self.tips.pop();
            return Err(err);
        }

        tracing::info!(id = tip.id, category = %tip.category, "Created tip");
        Ok(tip)
    }

    /// Replace the whole collection and persist it
    ///
    /// # Errors
    ///
    /// - `StoreError::Malformed` if the ids are not positive and unique
    /// - `StoreError::SaveFailed` if persisting fails; the old collection is restored
    pub fn replace_all(&mut self, tips: Vec<Tip>) -> Result<(), StoreError> {
        let document = TipDocument::new(tips);
        document.check_ids().map_err(StoreError::Malformed)?;

        let previous = std::mem::replace(&mut self.tips, document.tips);
        if let Err(err) = self.save() {
            self.tips = previous;
            return Err(err);
        }
        Ok(())
    }

    /// All tips in insertion order
    #[must_use]
    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    /// Find a tip by id
    #[must_use]
    pub fn get(&self, id: TipId) -> Option<&Tip> {
        self.tips.iter().find(|tip| tip.id == id)
    }

    /// Find a tip by id, failing when absent
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TipNotFound` if no tip has this id.
    pub fn require(&self, id: TipId) -> Result<&Tip, StoreError> {
        self.get(id).ok_or(StoreError::TipNotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Path of the backing record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guard held for the duration of every write
    ///
    /// Shutdown code locks it to wait for an in-flight save.
    #[must_use]
    pub fn write_guard(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.write_guard)
    }
}

/// Read and parse a tip document
fn read_document(path: &Path) -> Result<TipDocument, StoreError> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::Missing(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    if contents.trim_ascii().is_empty() {
        return Err(StoreError::Empty(path.to_path_buf()));
    }

    // Invalid UTF-8 surfaces here as a parse error
    let document: TipDocument = serde_json::from_slice(&contents)?;
    document.check_ids().map_err(StoreError::Malformed)?;
    Ok(document)
}
