//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::anchor::Anchor;
use crate::traits::Filter;
use sources::Candidate;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExcludeAnchorFilter)
///     .add_filter(DedupTitleFilter)
///     .add_filter(CategoryOverlapFilter);
///
/// let filtered = pipeline.apply(candidates, &anchor);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter sees the output of the previous one; input and output
    /// counts are logged per filter.
    pub fn apply(&self, candidates: Vec<Candidate>, anchor: &Anchor) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, anchor);
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{DedupTitleFilter, ExcludeAnchorFilter};
    use catalog::{CatalogItem, MediaKind};
    use sources::CandidateSource;

    fn candidate(title: &str) -> Candidate {
        Candidate::new(
            CatalogItem::new(MediaKind::Movie, title),
            CandidateSource::Trending,
        )
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let anchor = Anchor::new("Heat", ["Crime"]);

        let candidates = vec![candidate("Heat"), candidate("Ronin")];

        let filtered = pipeline.apply(candidates.clone(), &anchor);
        assert_eq!(filtered, candidates);
    }

    #[test]
    fn test_filters_run_in_order() {
        let anchor = Anchor::new("Heat", ["Crime"]);
        let pipeline = FilterPipeline::new()
            .add_filter(ExcludeAnchorFilter)
            .add_filter(DedupTitleFilter);

        assert_eq!(
            pipeline.filter_names(),
            vec!["ExcludeAnchorFilter", "DedupTitleFilter"]
        );

        let candidates = vec![
            candidate("Ronin"),
            candidate("Heat"),
            candidate("Ronin"),
            candidate("Thief"),
        ];

        let filtered = pipeline.apply(candidates, &anchor);
        let titles: Vec<&str> = filtered.iter().map(Candidate::title).collect();
        assert_eq!(titles, vec!["Ronin", "Thief"]);
    }
}
