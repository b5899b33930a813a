//! Search command - find tips by keyword, optionally within a category

use crate::{TipsterError, output, query, store::TipStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, TipsterError>;

/// Execute the search command
///
/// A blank keyword cancels the search rather than matching everything.
pub fn execute(
    store: &TipStore,
    keyword: &str,
    category: Option<&str>,
    writer: &impl OutputWriter,
    quiet: bool,
) -> Result<()> {
    let Some(results) = query::search(store.tips(), keyword) else {
        if !quiet {
            writer.info("Search cancelled.");
        }
        return Ok(());
    };

    let results = match category {
        Some(category) => query::in_category(results, category),
        None => results,
    };

    if results.is_empty() {
        if !quiet {
            writer.warning(&format!("No tips found matching \"{}\".", keyword.trim()));
        }
    } else {
        writer.write(&output::search_results(keyword.trim(), &results));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TempStore, sample_tips};
    use crate::ui::MockOutput;

    fn store() -> (TempStore, TipStore) {
        let temp = TempStore::with_tips(&sample_tips());
        let (store, _) = TipStore::open(temp.path());
        (temp, store)
    }

    #[test]
    fn test_search_with_category_filter() {
        let (_temp, store) = store();
        let writer = MockOutput::new();

        execute(&store, "test", Some("testing"), &writer, false).unwrap();

        assert!(writer.contains("Found 2 tip(s)"));
        assert!(!writer.contains("Reproduce first"));
    }

    #[test]
    fn test_blank_keyword_is_cancelled() {
        let (_temp, store) = store();
        let writer = MockOutput::new();

        execute(&store, "  ", None, &writer, false).unwrap();

        assert!(writer.contains("Search cancelled."));
        assert!(!writer.contains("Found"));
    }

    #[test]
    fn test_no_results_quiet_prints_nothing() {
        let (_temp, store) = store();
        let writer = MockOutput::new();

        execute(&store, "kubernetes", None, &writer, true).unwrap();

        assert!(writer.messages().is_empty());
    }
}
