//! Genre-tier movie recommender.
//!
//! ## Algorithm
//! Candidates are the trending pool minus the anchor. Three tiers are
//! tried in order and the first non-empty one is the answer:
//! 1. **Exact**: genre set equal to the anchor's
//! 2. **Superset**: genre set containing every anchor genre
//! 3. **Overlap**: at least one genre in common
//!
//! Tiers are never blended. With an empty anchor genre set, Exact matches
//! only genre-less movies, Superset matches everything (nothing is
//! required) and Overlap matches nothing.

use crate::anchor::Anchor;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{DedupTitleFilter, ExcludeAnchorFilter};
use crate::recommendations::Recommendations;
use crate::traits::Filter;
use catalog::CatalogItem;
use sources::{Candidate, CandidateSource};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, instrument};

/// Genre matching rule, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    Exact,
    Superset,
    Overlap,
}

impl MatchTier {
    /// All tiers, strictest first
    pub const ALL: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Superset, MatchTier::Overlap];

    /// Whether a movie with `item_tags` satisfies this tier for `anchor_tags`
    pub fn matches(self, anchor_tags: &BTreeSet<&str>, item_tags: &BTreeSet<&str>) -> bool {
        match self {
            MatchTier::Exact => item_tags == anchor_tags,
            MatchTier::Superset => anchor_tags.is_subset(item_tags),
            MatchTier::Overlap => !anchor_tags.is_disjoint(item_tags),
        }
    }

    /// Short explanation for console output
    pub fn describe(self) -> &'static str {
        match self {
            MatchTier::Exact => "same genres",
            MatchTier::Superset => "all of its genres",
            MatchTier::Overlap => "at least one shared genre",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::Superset => write!(f, "superset"),
            MatchTier::Overlap => write!(f, "overlap"),
        }
    }
}

/// Ranks a trending pool against a searched movie.
pub struct MovieRecommender {
    prefilter: FilterPipeline,
}

impl MovieRecommender {
    pub fn new() -> Self {
        Self {
            prefilter: FilterPipeline::new().add_filter(ExcludeAnchorFilter),
        }
    }

    /// Recommend movies from `pool` for `anchor`.
    ///
    /// Returns an empty list (never an error) when the pool is empty or no
    /// tier matches.
    #[instrument(skip_all, fields(anchor = %anchor.title, pool_size = pool.len()))]
    pub fn recommend(&self, anchor: &Anchor, pool: &[CatalogItem]) -> Recommendations {
        let candidates = self.prefilter.apply(
            Candidate::from_pool(pool.iter().cloned(), CandidateSource::Trending),
            anchor,
        );
        let anchor_tags = anchor.tag_set();

        for tier in MatchTier::ALL {
            let matched: Vec<Candidate> = candidates
                .iter()
                .filter(|candidate| tier.matches(&anchor_tags, &candidate.item.tag_set()))
                .cloned()
                .collect();

            if matched.is_empty() {
                debug!("No candidates in {} tier", tier);
                continue;
            }

            let items: Vec<CatalogItem> = DedupTitleFilter
                .apply(matched, anchor)
                .into_iter()
                .map(|candidate| candidate.item)
                .collect();
            debug!("Selected {} movies from {} tier", items.len(), tier);
            return Recommendations::new(items, Some(tier));
        }

        Recommendations::empty()
    }
}

impl Default for MovieRecommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-and-genres form of [`MovieRecommender::recommend`].
pub fn recommend_by_genre(
    anchor_title: &str,
    anchor_tags: &BTreeSet<String>,
    pool: &[CatalogItem],
) -> Vec<CatalogItem> {
    let anchor = Anchor::new(anchor_title, anchor_tags.iter().cloned());
    MovieRecommender::new().recommend(&anchor, pool).items
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MediaKind;

    fn movie(title: &str, genres: &[&str]) -> CatalogItem {
        CatalogItem::new(MediaKind::Movie, title).with_tags(genres.iter().copied())
    }

    fn set<'a>(tags: &[&'a str]) -> BTreeSet<&'a str> {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_tier_predicates() {
        let anchor = set(&["Action", "Comedy"]);

        assert!(MatchTier::Exact.matches(&anchor, &set(&["Comedy", "Action"])));
        assert!(!MatchTier::Exact.matches(&anchor, &set(&["Action", "Comedy", "Drama"])));

        assert!(MatchTier::Superset.matches(&anchor, &set(&["Action", "Comedy", "Drama"])));
        assert!(!MatchTier::Superset.matches(&anchor, &set(&["Action"])));

        assert!(MatchTier::Overlap.matches(&anchor, &set(&["Action"])));
        assert!(!MatchTier::Overlap.matches(&anchor, &set(&["Drama"])));
    }

    #[test]
    fn test_empty_anchor_tags_follow_set_semantics() {
        let empty = BTreeSet::new();

        assert!(MatchTier::Exact.matches(&empty, &BTreeSet::new()));
        assert!(!MatchTier::Exact.matches(&empty, &set(&["Action"])));
        assert!(MatchTier::Superset.matches(&empty, &set(&["Action"])));
        assert!(!MatchTier::Overlap.matches(&empty, &set(&["Action"])));
        assert!(!MatchTier::Overlap.matches(&empty, &BTreeSet::new()));
    }

    #[test]
    fn test_exact_tier_wins() {
        let anchor = Anchor::new("Anchor", ["Action", "Comedy"]);
        let pool = vec![
            movie("A", &["Comedy", "Action"]),
            movie("B", &["Action"]),
            movie("C", &["Drama"]),
        ];

        let recs = MovieRecommender::new().recommend(&anchor, &pool);
        assert_eq!(recs.titles(), vec!["A"]);
        assert_eq!(recs.tier, Some(MatchTier::Exact));
    }

    #[test]
    fn test_superset_tier_when_no_exact_match() {
        let anchor = Anchor::new("Anchor", ["Action", "Comedy"]);
        let pool = vec![movie("B", &["Action", "Comedy", "Sci-Fi"]), movie("C", &["Drama"])];

        let recs = MovieRecommender::new().recommend(&anchor, &pool);
        assert_eq!(recs.titles(), vec!["B"]);
        assert_eq!(recs.tier, Some(MatchTier::Superset));
    }

    #[test]
    fn test_overlap_tier_as_last_resort() {
        let anchor = Anchor::new("Anchor", ["Action", "Comedy"]);
        let pool = vec![movie("D", &["Action"]), movie("E", &["Romance"])];

        let recs = MovieRecommender::new().recommend(&anchor, &pool);
        assert_eq!(recs.titles(), vec!["D"]);
        assert_eq!(recs.tier, Some(MatchTier::Overlap));
    }

    #[test]
    fn test_no_tier_matches() {
        let anchor = Anchor::new("Anchor", ["Western"]);
        let pool = vec![movie("E", &["Romance"])];

        let recs = MovieRecommender::new().recommend(&anchor, &pool);
        assert!(recs.is_empty());
        assert_eq!(recs.tier, None);
    }

    #[test]
    fn test_anchor_never_recommended() {
        let anchor = Anchor::new("Heat", ["Action", "Crime"]);
        let pool = vec![movie("Heat", &["Action", "Crime"]), movie("Ronin", &["Action", "Thriller"])];

        // The only exact match is the anchor itself, so the exact tier is empty
        let recs = MovieRecommender::new().recommend(&anchor, &pool);
        assert_eq!(recs.titles(), vec!["Ronin"]);
        assert_eq!(recs.tier, Some(MatchTier::Overlap));
    }

    #[test]
    fn test_duplicate_titles_collapse_within_tier() {
        let anchor = Anchor::new("Anchor", ["Drama"]);
        let pool = vec![
            movie("Twin", &["Drama"]),
            movie("Other", &["Drama"]),
            movie("Twin", &["Drama"]),
        ];

        let recs = MovieRecommender::new().recommend(&anchor, &pool);
        assert_eq!(recs.titles(), vec!["Twin", "Other"]);
    }

    #[test]
    fn test_empty_pool() {
        let anchor = Anchor::new("Anchor", ["Drama"]);
        assert!(MovieRecommender::new().recommend(&anchor, &[]).is_empty());
    }

    #[test]
    fn test_recommend_by_genre() {
        let tags: BTreeSet<String> = ["Action".to_string()].into_iter().collect();
        let pool = vec![movie("X", &["Action"]), movie("Y", &["Action", "Drama"])];

        let recs = recommend_by_genre("Anchor", &tags, &pool);
        assert_eq!(recs, vec![movie("X", &["Action"])]);
    }
}
