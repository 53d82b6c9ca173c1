//! Relevance filters for book candidates.
//!
//! Two interchangeable policies:
//! - [`CategoryOverlapFilter`] requires a shared category for every
//!   candidate, including ones found through the anchor's authors.
//! - [`AuthorOrCategoryFilter`] lets author-search candidates through
//!   unconditionally and applies the category check to the rest.
//!
//! `BookRecommender` uses the strict policy by default.

use crate::anchor::Anchor;
use crate::traits::Filter;
use sources::{Candidate, CandidateSource};

fn shares_category(candidate: &Candidate, anchor: &Anchor) -> bool {
    candidate
        .item
        .tags
        .iter()
        .any(|category| anchor.tags.contains(category))
}

/// Keeps only candidates with at least one category in common with the anchor.
///
/// A candidate without categories, or an anchor without categories, never
/// matches.
pub struct CategoryOverlapFilter;

impl Filter for CategoryOverlapFilter {
    fn name(&self) -> &str {
        "CategoryOverlapFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, anchor: &Anchor) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| shares_category(candidate, anchor))
            .collect()
    }
}

/// Keeps author-search candidates, and other candidates sharing a category.
pub struct AuthorOrCategoryFilter;

impl Filter for AuthorOrCategoryFilter {
    fn name(&self) -> &str {
        "AuthorOrCategoryFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, anchor: &Anchor) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                candidate.source == CandidateSource::AuthorSearch
                    || shares_category(candidate, anchor)
            })
            .collect()
    }
}
