//! Add command - create a tip from command-line arguments

use crate::{TipsterError, output, store::NewTip, store::TipStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the add command
///
/// # Errors
///
/// Returns `StoreError::Validation` for a blank field or `StoreError::SaveFailed`
/// if the tips file cannot be written.
pub fn execute(store: &mut TipStore, new_tip: NewTip, writer: &impl OutputWriter, quiet: bool) -> Result<()> {
    let tip = store.create(new_tip)?;

    if quiet {
        writer.write(&tip.id.to_string());
    } else {
        writer.success(&format!("Tip #{} added successfully!", tip.id));
        writer.write(&output::tip_card(&tip));
    }
    Ok(())
}
