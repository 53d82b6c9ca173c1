//! Filter to remove the anchor itself from the candidates.
//!
//! Catalog feeds routinely contain the searched title; recommending it
//! back is never useful.

use crate::anchor::Anchor;
use crate::traits::Filter;
use sources::Candidate;

/// Removes candidates whose title equals the anchor's title.
pub struct ExcludeAnchorFilter;

impl Filter for ExcludeAnchorFilter {
    fn name(&self) -> &str {
        "ExcludeAnchorFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, anchor: &Anchor) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| !anchor.is_anchor(&candidate.item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CatalogItem, MediaKind};
    use sources::CandidateSource;

    #[test]
    fn test_exclude_anchor_filter() {
        let anchor = Anchor::new("Alien", ["Horror"]);

        let candidates = Candidate::from_pool(
            vec![
                CatalogItem::new(MediaKind::Movie, "Aliens"),
                CatalogItem::new(MediaKind::Movie, "Alien").with_id(348),
                CatalogItem::new(MediaKind::Movie, "Prometheus"),
                CatalogItem::new(MediaKind::Movie, "Alien").with_id(1),
            ],
            CandidateSource::Trending,
        );

        let filtered = ExcludeAnchorFilter.apply(candidates, &anchor);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title(), "Aliens");
        assert_eq!(filtered[1].title(), "Prometheus");
    }

    #[test]
    fn test_title_match_is_exact() {
        let anchor = Anchor::new("Alien", Vec::<String>::new());
        let candidates = Candidate::from_pool(
            vec![CatalogItem::new(MediaKind::Movie, "alien")],
            CandidateSource::Trending,
        );

        assert_eq!(ExcludeAnchorFilter.apply(candidates, &anchor).len(), 1);
    }
}
