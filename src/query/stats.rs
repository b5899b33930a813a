//! Collection statistics

use crate::store::Tip;

/// A category label with the number of tips in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    #[must_use]
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Summary of a collection and the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Number of tips in the collection
    pub total: usize,
    /// Number of tips shown in the current cycle
    pub shown: usize,
    /// Number of distinct categories
    pub categories: usize,
    /// `round(100 * shown / total)`, `0` for an empty collection
    pub completion: u32,
    /// Largest category; ties go to the one encountered first
    pub top_category: Option<CategoryCount>,
}

/// Compute statistics for `tips` given how many were shown this session
#[must_use]
pub fn statistics(tips: &[Tip], shown: usize) -> Stats {
    // Insertion-ordered counts so ties resolve to the first category seen
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tip in tips {
        let category = tip.category.as_str();
        match counts.iter_mut().find(|entry| entry.0 == category) {
            Some(entry) => entry.1 += 1,
            None => counts.push((category, 1)),
        }
    }

    let top_category = counts
        .iter()
        .fold(None::<(&str, usize)>, |best, &(name, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((name, count)),
        })
        .map(|(name, count)| CategoryCount::new(name, count));

    Stats {
        total: tips.len(),
        shown,
        categories: counts.len(),
        completion: completion_percent(shown, tips.len()),
        top_category,
    }
}

/// Rounded percentage of `shown` over `total`, defined as `0` when `total` is `0`
#[must_use]
pub fn completion_percent(shown: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let percent = (100.0 * shown as f64 / total as f64).round() as u32;
    percent
}
