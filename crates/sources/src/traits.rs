//! Catalog traits.
//!
//! The dispatcher only talks to these traits, so the HTTP clients can be
//! swapped for mocks or other providers without touching ranking code.

use crate::error::SourceResult;
use catalog::CatalogItem;

/// Prefix the volumes API uses to restrict a query to authors
pub const AUTHOR_QUERY_PREFIX: &str = "inauthor:";

/// Prefix the volumes API uses to restrict a query to subjects
pub const CATEGORY_QUERY_PREFIX: &str = "subject:";

/// A movie catalog with free-text search and a popular-titles feed.
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies by title; genres are already resolved to display names.
    async fn search(&self, query: &str) -> SourceResult<Vec<CatalogItem>>;

    /// The current trending/popular movies, used as the candidate pool.
    async fn trending(&self) -> SourceResult<Vec<CatalogItem>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// A book catalog with free-text search.
///
/// Author and category searches are expressed as ordinary searches with a
/// field prefix; providers with dedicated endpoints can override them.
#[async_trait::async_trait]
pub trait BookCatalog: Send + Sync {
    async fn search(&self, query: &str) -> SourceResult<Vec<CatalogItem>>;

    /// Books by any of `authors`. Empty input returns nothing without a request.
    async fn search_by_authors(&self, authors: &[String]) -> SourceResult<Vec<CatalogItem>> {
        if authors.is_empty() {
            return Ok(Vec::new());
        }
        self.search(&field_query(AUTHOR_QUERY_PREFIX, authors)).await
    }

    /// Books in `categories`. Empty input returns nothing without a request.
    async fn search_by_categories(&self, categories: &[String]) -> SourceResult<Vec<CatalogItem>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }
        self.search(&field_query(CATEGORY_QUERY_PREFIX, categories)).await
    }

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// `prefix` followed by the terms joined with `+`
pub fn field_query(prefix: &str, terms: &[String]) -> String {
    format!("{}{}", prefix, terms.join("+"))
}
