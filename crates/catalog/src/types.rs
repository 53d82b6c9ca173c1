//! Core domain types shared by every pipeline.
//!
//! A [`CatalogItem`] is an immutable value fetched fresh from a catalog
//! for each query. Movies and books share the same shape: movies carry
//! genres as tags and no authors, books carry categories as tags.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque catalog identifier (TMDB movie id)
pub type ItemId = u64;

/// Opaque numeric genre id from the movie catalog vocabulary
pub type GenreId = u32;

/// Display name used for genre ids missing from the vocabulary
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Placeholder for display-only fields the catalog did not supply
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// Media kind
// =============================================================================

/// Which catalog an item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Movie,
    Book,
}

impl MediaKind {
    /// Plural label used in console headings ("Movies", "Books")
    pub fn plural(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movies",
            MediaKind::Book => "Books",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Book => write!(f, "book"),
        }
    }
}

// =============================================================================
// CatalogItem
// =============================================================================

/// A movie or a book as returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog id; books from the volumes API are not assigned one
    pub id: Option<ItemId>,
    pub kind: MediaKind,
    /// Used as the de-duplication and exclusion key
    pub title: String,
    pub original_title: Option<String>,
    /// Genres (movies) or categories (books), in catalog order
    pub tags: Vec<String>,
    /// Authors in catalog order; always empty for movies
    pub authors: Vec<String>,
    /// Release or publication date, display-only
    pub release_date: Option<String>,
}

impl CatalogItem {
    /// Create an item with only a kind and a title.
    pub fn new(kind: MediaKind, title: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            title: title.into(),
            original_title: None,
            tags: Vec::new(),
            authors: Vec::new(),
            release_date: None,
        }
    }

    /// Like [`CatalogItem::new`] but rejects a missing or blank title.
    ///
    /// Parsers use this so that a malformed payload fails loudly instead
    /// of producing an item every other item could collide with.
    pub fn try_new(kind: MediaKind, title: Option<String>) -> Result<Self> {
        match title {
            Some(title) if !title.trim().is_empty() => Ok(Self::new(kind, title)),
            _ => Err(CatalogError::MissingField { field: "title" }),
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_original_title(mut self, original_title: impl Into<String>) -> Self {
        self.original_title = Some(original_title.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Tags as a set. Duplicate or reordered tags compare equal.
    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    /// Release date for display, `"N/A"` when unknown
    pub fn display_release(&self) -> &str {
        self.release_date.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

// =============================================================================
// GenreMap
// =============================================================================

/// Movie genre vocabulary: numeric id to display name.
///
/// The recommenders only ever see display names; resolution happens while
/// a catalog page is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreMap {
    names: HashMap<GenreId, String>,
}

impl GenreMap {
    /// Creates an empty vocabulary; every id resolves to `"Unknown"`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: GenreId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Display name for `id`, `"Unknown"` if the vocabulary lacks it
    pub fn resolve(&self, id: GenreId) -> &str {
        self.names.get(&id).map(String::as_str).unwrap_or(UNKNOWN_GENRE)
    }

    /// Resolve a list of ids, keeping their order
    pub fn resolve_all(&self, ids: &[GenreId]) -> Vec<String> {
        ids.iter().map(|id| self.resolve(*id).to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(GenreId, String)> for GenreMap {
    fn from_iter<T: IntoIterator<Item = (GenreId, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
