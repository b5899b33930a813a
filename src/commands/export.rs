//! Export command - write the collection as JSON or CSV

use crate::{TipsterError, cli::ExportFormat, export, store::TipStore, ui::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the export command
///
/// # Errors
///
/// Returns `ExportError` if encoding or writing fails.
pub fn execute(
    store: &TipStore,
    path: &Path,
    format: ExportFormat,
    writer: &impl OutputWriter,
    quiet: bool,
) -> Result<()> {
    let count = export::export(store.tips(), path, format)?;
    if !quiet {
        writer.success(&format!("Exported {count} tip(s) to {}", path.display()));
    }
    Ok(())
}
