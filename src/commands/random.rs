//! Random command - a random tip, optionally from a given category

use crate::{TipsterError, output, query, session::RandomSource, store::TipStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the random command
///
/// Without a category, a category is drawn first and then a tip within it.
///
/// # Errors
///
/// Returns `TipsterError::InvalidInput` if the category has no tips.
pub fn execute<R: RandomSource + ?Sized>(
    store: &TipStore,
    category: Option<&str>,
    rng: &mut R,
    writer: &impl OutputWriter,
    quiet: bool,
) -> Result<()> {
    if let Some(category) = category {
        let tip = query::random_tip(store.tips(), Some(category), rng)
            .ok_or_else(|| TipsterError::InvalidInput(format!("No tips in category '{category}'")))?;
        writer.write(&output::tip_card(tip));
        return Ok(());
    }

    match query::random_category(store.tips(), rng) {
        Some((category, tip)) => {
            if !quiet {
                writer.info(&format!("{} Random pick from {category}", output::category_icon(category)));
            }
            writer.write(&output::tip_card(tip));
        }
        None => {
            if !quiet {
                writer.warning("No tips available.");
            }
        }
    }
    Ok(())
}
