//! Read-only views over a tip collection
//!
//! Stateless search, category aggregation and statistics. Nothing here mutates
//! the collection or the session; random draws take their own source and do
//! not mark tips as shown.

pub mod stats;

pub use stats::{CategoryCount, Stats, completion_percent, statistics};

use crate::session::RandomSource;
use crate::store::Tip;
use std::collections::BTreeMap;

/// Case-insensitive substring search over title, content and category
///
/// A blank keyword means the search was cancelled and yields `None`, never
/// "everything". Matches keep collection order.
#[must_use]
pub fn search<'a>(tips: &'a [Tip], keyword: &str) -> Option<Vec<&'a Tip>> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    Some(
        tips.iter()
            .filter(|tip| {
                tip.title.to_lowercase().contains(&needle)
                    || tip.content.to_lowercase().contains(&needle)
                    || tip.category.to_lowercase().contains(&needle)
            })
            .collect(),
    )
}

/// Keep only tips whose category equals `category`, ignoring case
#[must_use]
pub fn in_category<'a>(tips: impl IntoIterator<Item = &'a Tip>, category: &str) -> Vec<&'a Tip> {
    let wanted = category.trim().to_lowercase();
    tips.into_iter()
        .filter(|tip| tip.category.to_lowercase() == wanted)
        .collect()
}

/// Distinct categories in lexicographic order with their tip counts
#[must_use]
pub fn categories(tips: &[Tip]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tip in tips {
        *counts.entry(tip.category.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| CategoryCount::new(name, count))
        .collect()
}

/// Distinct category labels in the order they first appear
#[must_use]
pub fn categories_in_order(tips: &[Tip]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for tip in tips {
        if !seen.contains(&tip.category.as_str()) {
            seen.push(&tip.category);
        }
    }
    seen
}

/// Pick a category uniformly, then a tip uniformly within it
///
/// Independent of the session: the tip is not marked shown.
pub fn random_category<'a, R: RandomSource + ?Sized>(
    tips: &'a [Tip],
    rng: &mut R,
) -> Option<(&'a str, &'a Tip)> {
    let labels = categories_in_order(tips);
    if labels.is_empty() {
        return None;
    }

    let category = labels[rng.index(labels.len())];
    let members: Vec<&Tip> = tips.iter().filter(|tip| tip.category == category).collect();
    let tip = members[rng.index(members.len())];
    Some((category, tip))
}

/// Pick a tip uniformly, optionally restricted to a category (case-insensitive)
pub fn random_tip<'a, R: RandomSource + ?Sized>(
    tips: &'a [Tip],
    category: Option<&str>,
    rng: &mut R,
) -> Option<&'a Tip> {
    let pool: Vec<&Tip> = match category {
        Some(category) => in_category(tips, category),
        None => tips.iter().collect(),
    };
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.index(pool.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FixedIndex;
    use crate::store::TipId;
    use crate::testing::sample_tips;
    use pretty_assertions::assert_eq;

    fn ids(tips: &[&Tip]) -> Vec<TipId> {
        tips.iter().map(|tip| tip.id).collect()
    }

    #[test]
    fn test_search_matches_any_field_ignoring_case() {
        let tips = vec![Tip::new(1, "Export directory", "CSV", "Automation")];

        for keyword in ["automation", "csv", "EXPORT", "  Direct  "] {
            let found = search(&tips, keyword).unwrap();
            assert_eq!(ids(&found), vec![1], "keyword {keyword:?}");
        }
    }

    #[test]
    fn test_search_blank_is_cancelled() {
        let tips = sample_tips();
        assert!(search(&tips, "").is_none());
        assert!(search(&tips, "   ").is_none());
    }

    #[test]
    fn test_search_keeps_collection_order() {
        let tips = sample_tips();
        let found = search(&tips, "test").unwrap();
        let found_ids = ids(&found);

        let mut sorted = found_ids.clone();
        sorted.sort_unstable();
        assert!(!found_ids.is_empty());
        assert_eq!(found_ids, sorted);
    }

    #[test]
    fn test_search_no_match() {
        let tips = sample_tips();
        assert_eq!(search(&tips, "zzz-nothing").unwrap().len(), 0);
    }

    #[test]
    fn test_categories_sorted_with_counts() {
        let tips = vec![
            Tip::new(1, "a", "b", "Testing"),
            Tip::new(2, "a", "b", "Security"),
            Tip::new(3, "a", "b", "Testing"),
            Tip::new(4, "a", "b", "Chat Features"),
        ];

        assert_eq!(
            categories(&tips),
            vec![
                CategoryCount::new("Chat Features", 1),
                CategoryCount::new("Security", 1),
                CategoryCount::new("Testing", 2),
            ]
        );
    }

    #[test]
    fn test_categories_empty() {
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_in_category_ignores_case() {
        let tips = sample_tips();
        let security = in_category(&tips, "security");
        assert!(!security.is_empty());
        assert!(security.iter().all(|tip| tip.category == "Security"));
    }

    #[test]
    fn test_random_category_with_fixed_source() {
        let tips = vec![
            Tip::new(1, "a", "b", "Testing"),
            Tip::new(2, "a", "b", "Security"),
            Tip::new(3, "a", "b", "Security"),
        ];

        let (category, tip) = random_category(&tips, &mut FixedIndex(1)).unwrap();

        assert_eq!(category, "Security");
        assert_eq!(tip.id, 3);
    }

    #[test]
    fn test_random_category_empty() {
        assert!(random_category(&[], &mut FixedIndex(0)).is_none());
    }

    #[test]
    fn test_random_tip_filtered() {
        let tips = sample_tips();
        let tip = random_tip(&tips, Some("TESTING"), &mut FixedIndex(0)).unwrap();
        assert_eq!(tip.category, "Testing");

        assert!(random_tip(&tips, Some("No Such Category"), &mut FixedIndex(0)).is_none());
        assert!(random_tip(&[], None, &mut FixedIndex(0)).is_none());
    }
}
