//! Candidate types shared between the catalog sources and the pipeline.

use catalog::CatalogItem;

/// Which candidate pool an item was drawn from.
///
/// Recorded so that relevance filters can treat items differently
/// depending on how they were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Popular/trending movie feed
    Trending,
    /// Book search by the anchor's authors
    AuthorSearch,
    /// Book search by the anchor's categories
    CategorySearch,
}

/// A catalog item tagged with the pool it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub item: CatalogItem,
    pub source: CandidateSource,
}

impl Candidate {
    pub fn new(item: CatalogItem, source: CandidateSource) -> Self {
        Self { item, source }
    }

    /// Tag every item of a pool with the same source, keeping pool order
    pub fn from_pool(items: impl IntoIterator<Item = CatalogItem>, source: CandidateSource) -> Vec<Self> {
        items
            .into_iter()
            .map(|item| Self::new(item, source))
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }
}
