//! Google Books catalog (`/books/v1/volumes`).
//!
//! Free-text queries go straight to `q`; author and category searches use
//! the `inauthor:` / `subject:` prefixes provided by [`BookCatalog`].

use crate::error::{SourceError, SourceResult};
use crate::traits::BookCatalog;
use catalog::{CatalogItem, MediaKind};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{info, instrument, warn};

const SERVICE: &str = "Google Books";

#[derive(Clone)]
pub struct GoogleBooksClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

#[derive(Deserialize)]
struct Volumes {
    /// Absent when nothing matched
    items: Option<Vec<Volume>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    volume_info: VolumeInfo,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    categories: Vec<String>,
    published_date: Option<String>,
}

impl VolumeInfo {
    fn into_item(self) -> SourceResult<CatalogItem> {
        let mut item = CatalogItem::try_new(MediaKind::Book, self.title)?
            .with_authors(self.authors)
            .with_tags(self.categories);
        if let Some(date) = self.published_date {
            item = item.with_release_date(date);
        }
        Ok(item)
    }
}

/// Parse a volumes response body.
///
/// A body without `items` is a successful search with no hits. Volumes
/// without a title are skipped; the rest of the page is kept.
pub fn parse_volumes(body: &str) -> SourceResult<Vec<CatalogItem>> {
    let volumes: Volumes = serde_json::from_str(body).map_err(|e| SourceError::MalformedPayload {
        service: SERVICE,
        reason: e.to_string(),
    })?;

    let mut books = Vec::new();
    for (position, volume) in volumes.items.unwrap_or_default().into_iter().enumerate() {
        match volume.volume_info.into_item() {
            Ok(book) => books.push(book),
            Err(e) => warn!(error = %e, position, "Skipping volume"),
        }
    }
    Ok(books)
}

impl GoogleBooksClient {
    /// Create a client; `api_url` is the full volumes endpoint
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl BookCatalog for GoogleBooksClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> SourceResult<Vec<CatalogItem>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("q", query), ("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let books = parse_volumes(&body)?;

        info!(query = %query, result_count = books.len(), "Google Books search completed");
        Ok(books)
    }

    fn name(&self) -> &'static str {
        SERVICE
    }
}
