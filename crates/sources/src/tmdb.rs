//! TMDB movie catalog.
//!
//! API flow:
//! 1. Search: `/search/movie?query=…` returns a page of movies with numeric genre ids
//! 2. Popular: `/movie/popular` returns the current trending page
//! 3. Genres: `/genre/movie/list` maps genre ids to display names
//!
//! The genre vocabulary is fetched once per non-empty page and resolved
//! before items leave this module, so downstream code only sees names.

use crate::error::{SourceError, SourceResult};
use crate::traits::MovieCatalog;
use catalog::{CatalogItem, GenreId, GenreMap, ItemId, MediaKind};
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

const SERVICE: &str = "TMDB";

const SEARCH_PATH: &str = "/search/movie";
const POPULAR_PATH: &str = "/movie/popular";
const GENRE_PATH: &str = "/genre/movie/list";

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    read_token: String,
    api_url: String,
}

#[derive(Deserialize)]
struct MoviePage {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

#[derive(Deserialize)]
struct TmdbMovie {
    id: ItemId,
    title: Option<String>,
    original_title: Option<String>,
    #[serde(default)]
    genre_ids: Vec<GenreId>,
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct GenreList {
    genres: Vec<TmdbGenre>,
}

#[derive(Deserialize)]
struct TmdbGenre {
    id: GenreId,
    name: String,
}

impl TmdbMovie {
    fn into_item(self, genres: &GenreMap) -> SourceResult<CatalogItem> {
        let mut item = CatalogItem::try_new(MediaKind::Movie, self.title)?
            .with_id(self.id)
            .with_tags(genres.resolve_all(&self.genre_ids));
        if let Some(original_title) = self.original_title {
            item = item.with_original_title(original_title);
        }
        // TMDB sends "" for unreleased titles
        if let Some(date) = self.release_date.filter(|d| !d.is_empty()) {
            item = item.with_release_date(date);
        }
        Ok(item)
    }
}

fn malformed(err: serde_json::Error) -> SourceError {
    SourceError::MalformedPayload {
        service: SERVICE,
        reason: err.to_string(),
    }
}

/// Parse a `/genre/movie/list` body into a vocabulary
pub fn parse_genre_list(body: &str) -> SourceResult<GenreMap> {
    let list: GenreList = serde_json::from_str(body).map_err(malformed)?;
    Ok(list
        .genres
        .into_iter()
        .map(|genre| (genre.id, genre.name))
        .collect())
}

fn decode_page(body: &str) -> SourceResult<MoviePage> {
    serde_json::from_str(body).map_err(malformed)
}

fn resolve_page(page: MoviePage, genres: &GenreMap) -> SourceResult<Vec<CatalogItem>> {
    page.results
        .into_iter()
        .map(|movie| movie.into_item(genres))
        .collect()
}

/// Parse a search or popular page, resolving genre ids through `genres`
pub fn parse_movie_page(body: &str, genres: &GenreMap) -> SourceResult<Vec<CatalogItem>> {
    resolve_page(decode_page(body)?, genres)
}

impl TmdbClient {
    /// Create a client authenticating with a v4 read access token
    pub fn new(read_token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            read_token: read_token.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `path` and return the body of a successful response
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> SourceResult<String> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.read_token)
            .header(ACCEPT, "application/json")
            .query(query)
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

        Ok(response.text().await?)
    }

    /// Fetch the genre vocabulary
    #[instrument(skip(self))]
    pub async fn fetch_genre_map(&self) -> SourceResult<GenreMap> {
        let body = self.get(GENRE_PATH, &[]).await?;
        let genres = parse_genre_list(&body)?;
        debug!(genre_count = genres.len(), "Fetched TMDB genre vocabulary");
        Ok(genres)
    }

    /// Fetch one page of movies and resolve its genres.
    ///
    /// A failed vocabulary fetch is not fatal: every genre then resolves
    /// to "Unknown".
    async fn fetch_movie_page(&self, path: &str, query: &[(&str, &str)]) -> SourceResult<Vec<CatalogItem>> {
        let body = self.get(path, query).await?;

        let page = decode_page(&body)?;
        if page.results.is_empty() {
            return Ok(Vec::new());
        }

        let genres = match self.fetch_genre_map().await {
            Ok(genres) => genres,
            Err(e) => {
                warn!(error = %e, "Error fetching genres, resolving all as unknown");
                GenreMap::new()
            }
        };

        resolve_page(page, &genres)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> SourceResult<Vec<CatalogItem>> {
        let movies = self.fetch_movie_page(SEARCH_PATH, &[("query", query)]).await?;
        info!(query = %query, result_count = movies.len(), "TMDB search completed");
        Ok(movies)
    }

    #[instrument(skip(self))]
    async fn trending(&self) -> SourceResult<Vec<CatalogItem>> {
        let movies = self.fetch_movie_page(POPULAR_PATH, &[]).await?;
        info!(result_count = movies.len(), "Fetched popular movies");
        Ok(movies)
    }

    fn name(&self) -> &'static str {
        SERVICE
    }
}
