//! The anchor item recommendations are generated against.

use catalog::CatalogItem;
use std::collections::BTreeSet;

/// Title, tag set and authors of the first search result.
///
/// Tags are held as a set: anchor matching is order-insensitive and
/// ignores duplicate genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub title: String,
    pub tags: BTreeSet<String>,
    pub authors: Vec<String>,
}

impl Anchor {
    pub fn new<I, S>(title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            authors: Vec::new(),
        }
    }

    /// Build the anchor from a searched item
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            tags: item.tags.iter().cloned().collect(),
            authors: item.authors.clone(),
        }
    }

    /// Anchor tags borrowed as `&str`, comparable with [`CatalogItem::tag_set`]
    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    pub fn is_anchor(&self, item: &CatalogItem) -> bool {
        item.title == self.title
    }
}
