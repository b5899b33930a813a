//! Tip data structures
//!
//! - `Tip`: a single record (id, title, content, category)
//! - `NewTip`: the user-supplied fields of a tip that has no id yet
//! - `TipField`: names the user-supplied fields for validation errors
//! - `TipDocument`: the on-disk shape of the backing record

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a tip, unique across the collection
pub type TipId = u64;

/// A single tip record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tip {
    /// Unique, positive identifier
    pub id: TipId,
    /// Short headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Free-form category label
    pub category: String,
}

impl Tip {
    /// Create a tip from its parts
    #[must_use]
    pub fn new(
        id: TipId,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}

/// User-supplied fields for a tip that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTip {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl NewTip {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    /// Check that every field has non-blank text
    ///
    /// Fields are checked in prompt order (title, content, category) and the
    /// first blank one is reported.
    ///
    /// # Errors
    ///
    /// Returns the first `TipField` whose value is empty or whitespace only.
    pub fn validate(&self) -> Result<(), TipField> {
        [
            (TipField::Title, &self.title),
            (TipField::Content, &self.content),
            (TipField::Category, &self.category),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(field))
    }

    /// Turn into a stored tip with the given id, trimming surrounding whitespace
    #[must_use]
    pub fn into_tip(self, id: TipId) -> Tip {
        Tip::new(
            id,
            self.title.trim(),
            self.content.trim(),
            self.category.trim(),
        )
    }
}

/// The user-supplied fields of a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipField {
    Title,
    Content,
    Category,
}

impl TipField {
    /// Capitalized label used in prompts and messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Content => "Content",
            Self::Category => "Category",
        }
    }
}

impl fmt::Display for TipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// On-disk shape of the backing record: `{"tips": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipDocument {
    #[serde(default)]
    pub tips: Vec<Tip>,
}

impl TipDocument {
    #[must_use]
    pub const fn new(tips: Vec<Tip>) -> Self {
        Self { tips }
    }

    /// Check id integrity: every id positive and unique
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending id.
    pub fn check_ids(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.tips.len());
        for tip in &self.tips {
            if tip.id == 0 {
                return Err(format!("tip '{}' has id 0, ids must be positive", tip.title));
            }
            if !seen.insert(tip.id) {
                return Err(format!("duplicate tip id {}", tip.id));
            }
        }
        Ok(())
    }
}

/// Next id for a collection: one past the highest id, or 1 when empty
///
/// `None` once the highest id is `TipId::MAX`.
#[must_use]
pub fn next_id(tips: &[Tip]) -> Option<TipId> {
    tips.iter().map(|tip| tip.id).max().map_or(Some(1), |max| max.checked_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn test_next_id_follows_max_not_len() {
        let tips = vec![
            Tip::new(7, "a", "b", "c"),
            Tip::new(2, "a", "b", "c"),
        ];
        assert_eq!(next_id(&tips), Some(8));
    }

    #[test]
    fn test_next_id_at_max() {
        let tips = vec![Tip::new(TipId::MAX, "a", "b", "c")];
        assert_eq!(next_id(&tips), None);
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        assert_eq!(NewTip::new("", "", "").validate(), Err(TipField::Title));
        assert_eq!(NewTip::new("t", "  ", "").validate(), Err(TipField::Content));
        assert_eq!(NewTip::new("t", "c", "\t").validate(), Err(TipField::Category));
        assert_eq!(NewTip::new("t", "c", "k").validate(), Ok(()));
    }

    #[test]
    fn test_into_tip_trims() {
        let tip = NewTip::new(" Title ", "Body\n", " Testing").into_tip(4);
        assert_eq!(tip, Tip::new(4, "Title", "Body", "Testing"));
    }

    #[test]
    fn test_document_missing_tips_field() {
        let doc: TipDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.tips.is_empty());
    }

    #[test]
    fn test_check_ids() {
        let ok = TipDocument::new(vec![Tip::new(1, "a", "b", "c"), Tip::new(3, "a", "b", "c")]);
        assert!(ok.check_ids().is_ok());

        let dup = TipDocument::new(vec![Tip::new(2, "a", "b", "c"), Tip::new(2, "d", "e", "f")]);
        assert_eq!(dup.check_ids().unwrap_err(), "duplicate tip id 2");

        let zero = TipDocument::new(vec![Tip::new(0, "a", "b", "c")]);
        assert!(zero.check_ids().is_err());
    }
}
