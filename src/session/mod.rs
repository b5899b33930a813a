//! Session sampling
//!
//! Tracks which tips have been shown during this run and picks the next one so
//! that no tip repeats until every tip in the collection has been shown.
//!
//! # Workflow
//!
//! ```text
//! pick()
//!   ├─ collection empty → None
//!   ├─ unseen tips left (Sampling) → draw uniformly among them
//!   └─ none left (Exhausted) → forget shown ids, draw from the whole collection
//! ```
//!
//! Across the exhaustion boundary the same tip may come up twice in a row.
//! Session state lives only in memory and is dropped on exit.

pub mod random;

pub use random::{FixedIndex, RandomSource, RngSource, SeededRandom, ThreadRandom};

use crate::store::{Tip, TipId};
use std::collections::HashSet;

/// Logical state of the sampler relative to a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    /// Some tips have not been shown yet
    Sampling,
    /// Every tip in the collection has been shown
    Exhausted,
}

/// No-repeat-until-exhausted tip picker
pub struct SessionSampler<R> {
    shown: HashSet<TipId>,
    rng: R,
}

impl<R: RandomSource> SessionSampler<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            shown: HashSet::new(),
            rng,
        }
    }

    /// Pick a tip not yet shown in the current cycle and mark it shown
    ///
    /// Returns `None` only for an empty collection.
    pub fn pick<'a>(&mut self, tips: &'a [Tip]) -> Option<&'a Tip> {
        if tips.is_empty() {
            return None;
        }

        let mut eligible: Vec<&Tip> = tips
            .iter()
            .filter(|tip| !self.shown.contains(&tip.id))
            .collect();

        if eligible.is_empty() {
            tracing::debug!(count = tips.len(), "All tips shown, starting a new cycle");
            self.shown.clear();
            eligible = tips.iter().collect();
        }

        let tip = eligible[self.rng.index(eligible.len())];
        self.shown.insert(tip.id);
        Some(tip)
    }

    /// Forget every shown id
    pub fn reset(&mut self) {
        tracing::debug!(forgotten = self.shown.len(), "Session reset");
        self.shown.clear();
    }

    /// Number of ids marked shown in the current cycle
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// Whether `id` has been shown in the current cycle
    #[must_use]
    pub fn is_shown(&self, id: TipId) -> bool {
        self.shown.contains(&id)
    }

    /// State of the sampler with respect to `tips`
    #[must_use]
    pub fn state(&self, tips: &[Tip]) -> SamplerState {
        if tips.iter().all(|tip| self.shown.contains(&tip.id)) {
            SamplerState::Exhausted
        } else {
            SamplerState::Sampling
        }
    }

    /// Mutable access to the random source, for draws that must not touch session state
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
