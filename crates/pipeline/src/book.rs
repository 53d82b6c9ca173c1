//! Author/category book recommender.
//!
//! ## Algorithm
//! 1. Concatenate the author-search pool and the category-search pool
//! 2. Drop the anchor and repeated titles (first occurrence wins)
//! 3. Apply the relevance filter
//!
//! The relevance filter is a separate, swappable stage. The default,
//! [`CategoryOverlapFilter`], also drops author-search results that share
//! no category with the anchor; [`AuthorOrCategoryFilter`] keeps them.
//!
//! [`AuthorOrCategoryFilter`]: crate::filters::AuthorOrCategoryFilter

use crate::anchor::Anchor;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CategoryOverlapFilter, DedupTitleFilter, ExcludeAnchorFilter};
use crate::recommendations::Recommendations;
use crate::traits::Filter;
use catalog::CatalogItem;
use sources::{Candidate, CandidateSource};
use tracing::{debug, instrument};

/// Ranks author and category search results against a searched book.
pub struct BookRecommender {
    dedup: FilterPipeline,
    relevance: Box<dyn Filter>,
}

impl BookRecommender {
    /// Recommender with the strict category-overlap relevance filter
    pub fn new() -> Self {
        Self {
            dedup: FilterPipeline::new()
                .add_filter(ExcludeAnchorFilter)
                .add_filter(DedupTitleFilter),
            relevance: Box::new(CategoryOverlapFilter),
        }
    }

    /// Replace the relevance filter (builder pattern)
    pub fn with_relevance_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.relevance = Box::new(filter);
        self
    }

    /// Name of the active relevance filter
    pub fn relevance_filter(&self) -> &str {
        self.relevance.name()
    }

    /// Recommend books for `anchor_book` from the two search pools.
    ///
    /// Either pool may be empty; the result is then drawn from the other.
    #[instrument(
        skip_all,
        fields(
            anchor = %anchor_book.title,
            author_pool = author_pool.len(),
            category_pool = category_pool.len()
        )
    )]
    pub fn recommend(
        &self,
        anchor_book: &CatalogItem,
        author_pool: &[CatalogItem],
        category_pool: &[CatalogItem],
    ) -> Recommendations {
        let anchor = Anchor::from_item(anchor_book);

        let mut candidates =
            Candidate::from_pool(author_pool.iter().cloned(), CandidateSource::AuthorSearch);
        candidates.extend(Candidate::from_pool(
            category_pool.iter().cloned(),
            CandidateSource::CategorySearch,
        ));

        let unique = self.dedup.apply(candidates, &anchor);
        let relevant = self.relevance.apply(unique, &anchor);
        debug!(
            "{} kept {} books for '{}'",
            self.relevance.name(),
            relevant.len(),
            anchor.title
        );

        Recommendations::new(
            relevant.into_iter().map(|candidate| candidate.item).collect(),
            None,
        )
    }
}

impl Default for BookRecommender {
    fn default() -> Self {
        Self::new()
    }
}
