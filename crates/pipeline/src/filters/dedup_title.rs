//! Filter to drop repeated titles.
//!
//! Author and category searches overlap heavily, and catalog feeds can
//! list the same title more than once.

use crate::anchor::Anchor;
use crate::traits::Filter;
use sources::Candidate;
use std::collections::HashSet;

/// Keeps the first candidate for each title, preserving order.
pub struct DedupTitleFilter;

impl Filter for DedupTitleFilter {
    fn name(&self) -> &str {
        "DedupTitleFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _anchor: &Anchor) -> Vec<Candidate> {
        let mut seen_titles: HashSet<String> = HashSet::with_capacity(candidates.len());
        candidates
            .into_iter()
            .filter(|candidate| seen_titles.insert(candidate.item.title.clone()))
            .collect()
    }
}
