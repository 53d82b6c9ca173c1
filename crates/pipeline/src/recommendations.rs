//! Output type shared by both recommenders.

use crate::movie::MatchTier;
use catalog::CatalogItem;

/// An ordered recommendation list.
///
/// Never contains the anchor (by title) and never repeats a title; order
/// is the candidate-pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations {
    pub items: Vec<CatalogItem>,
    /// Movie tier that produced `items`; `None` for books and empty results
    pub tier: Option<MatchTier>,
}

impl Recommendations {
    pub fn new(items: Vec<CatalogItem>, tier: Option<MatchTier>) -> Self {
        Self { items, tier }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}
