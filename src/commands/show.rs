//! Show command - print one tip by id

use crate::{TipsterError, output, store::TipId, store::TipStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the show command
///
/// # Errors
///
/// Returns `StoreError::TipNotFound` if no tip has this id.
pub fn execute(store: &TipStore, id: TipId, writer: &impl OutputWriter) -> Result<()> {
    let tip = store.require(id)?;
    writer.write(&output::tip_card(tip));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use crate::testing::{TempStore, sample_tips};
    use crate::ui::MockOutput;

    #[test]
    fn test_show_existing_tip() {
        let temp = TempStore::with_tips(&sample_tips());
        let (store, _) = TipStore::open(temp.path());
        let writer = MockOutput::new();

        execute(&store, 3, &writer).unwrap();

        assert!(writer.contains("TIP #3: Slash commands"));
    }

    #[test]
    fn test_show_unknown_id() {
        let temp = TempStore::with_tips(&sample_tips());
        let (store, _) = TipStore::open(temp.path());

        let err = execute(&store, 42, &MockOutput::new()).unwrap_err();

        assert!(matches!(err, TipsterError::Store(StoreError::TipNotFound(42))));
        assert_eq!(err.to_string(), "Tip #42 not found");
    }
}
