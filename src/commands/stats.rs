//! Stats command - collection statistics
//!
//! A one-shot run has shown nothing yet, so session progress is always 0%.

use crate::{TipsterError, output, query, store::TipStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the stats command
pub fn execute(store: &TipStore, writer: &impl OutputWriter) -> Result<()> {
    let stats = query::statistics(store.tips(), 0);
    writer.write(&output::statistics(&stats));
    Ok(())
}
