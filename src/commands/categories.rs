//! Categories command - list categories with tip counts

use crate::{TipsterError, output, query, store::TipStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the categories command
pub fn execute(store: &TipStore, writer: &impl OutputWriter, quiet: bool) -> Result<()> {
    let categories = query::categories(store.tips());

    if categories.is_empty() {
        if !quiet {
            writer.info("No categories found.");
        }
    } else {
        writer.write(&output::category_list(&categories));
    }
    Ok(())
}
