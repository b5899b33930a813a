//! Init command - install the bundled starter tips

use crate::{
    TipsterError,
    store::{StoreError, Tip, TipDocument, TipStore},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, TipsterError>;

/// Starter collection shipped with the binary
pub const STARTER_TIPS: &str = include_str!("../../data/tips.json");

/// Parse the bundled starter collection
///
/// # Errors
///
/// Returns `StoreError::Malformed` if the bundled document is invalid.
pub fn starter_tips() -> std::result::Result<Vec<Tip>, StoreError> {
    let document: TipDocument = serde_json::from_str(STARTER_TIPS)?;
    document.check_ids().map_err(StoreError::Malformed)?;
    Ok(document.tips)
}

/// Execute the init command
///
/// # Errors
///
/// Returns `TipsterError::InvalidInput` if the tips file exists and `force` is
/// not set, or a `StoreError` if writing fails.
pub fn execute(store: &mut TipStore, force: bool, writer: &impl OutputWriter, quiet: bool) -> Result<()> {
    if store.path().exists() && !force {
        return Err(TipsterError::InvalidInput(format!(
            "{} already exists. Use --force to overwrite it.",
            store.path().display()
        )));
    }

    store.replace_all(starter_tips()?)?;
    tracing::info!(path = %store.path().display(), count = store.len(), "Installed starter tips");

    if !quiet {
        writer.success(&format!("Wrote {} starter tips to {}", store.len(), store.path().display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TempStore, sample_tips};
    use crate::ui::MockOutput;

    #[test]
    fn test_starter_tips_are_valid() {
        let tips = starter_tips().unwrap();
        assert!(!tips.is_empty());
        assert!(tips.iter().all(|tip| !tip.title.trim().is_empty() && !tip.category.trim().is_empty()));
    }

    #[test]
    fn test_init_creates_store() {
        let temp = TempStore::empty();
        let mut store = TipStore::new(temp.path());

        execute(&mut store, false, &MockOutput::new(), true).unwrap();

        let (reloaded, warning) = TipStore::open(temp.path());
        assert!(warning.is_none());
        assert_eq!(reloaded.tips(), starter_tips().unwrap().as_slice());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempStore::with_tips(&sample_tips());
        let mut store = TipStore::new(temp.path());

        let result = execute(&mut store, false, &MockOutput::new(), true);

        assert!(matches!(result, Err(TipsterError::InvalidInput(_))));
        let (reloaded, _) = TipStore::open(temp.path());
        assert_eq!(reloaded.tips(), sample_tips().as_slice());
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempStore::with_tips(&sample_tips());
        let mut store = TipStore::new(temp.path());

        execute(&mut store, true, &MockOutput::new(), true).unwrap();

        let (reloaded, _) = TipStore::open(temp.path());
        assert_eq!(reloaded.len(), starter_tips().unwrap().len());
    }
}
