//! # Query Dispatcher
//!
//! Runs one query through the selected pipelines:
//! 1. Search the catalog
//! 2. Take the first result as the anchor
//! 3. Fetch the candidate pool(s)
//! 4. Rank the pool(s) against the anchor
//!
//! Collaborator failures never escape: a failed search is reported as
//! "no results", a failed pool fetch becomes an empty pool. Pipelines run
//! one after another, never concurrently.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};

use catalog::{CatalogItem, MediaKind};
use pipeline::{Anchor, BookRecommender, MovieRecommender, Recommendations};
use sources::{BookCatalog, MovieCatalog, SourceResult};

use crate::mode::Mode;

/// What one pipeline produced for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The search returned nothing (or failed)
    NoResults,
    /// The search found items; `recommendations` may still be empty
    Ranked {
        searched: Vec<CatalogItem>,
        recommendations: Recommendations,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub kind: MediaKind,
    pub outcome: Outcome,
}

impl PipelineReport {
    fn no_results(kind: MediaKind) -> Self {
        Self {
            kind,
            outcome: Outcome::NoResults,
        }
    }
}

/// Unwrap a collaborator result, logging and substituting an empty list on failure
fn or_empty(result: SourceResult<Vec<CatalogItem>>, what: &str, service: &str) -> Vec<CatalogItem> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, service = %service, "Failed to fetch {}", what);
            Vec::new()
        }
    }
}

/// Coordinates catalogs and recommenders for a query
pub struct Dispatcher {
    movies: Arc<dyn MovieCatalog>,
    books: Arc<dyn BookCatalog>,
    movie_recommender: MovieRecommender,
    book_recommender: BookRecommender,
}

impl Dispatcher {
    pub fn new(movies: Arc<dyn MovieCatalog>, books: Arc<dyn BookCatalog>) -> Self {
        Self {
            movies,
            books,
            movie_recommender: MovieRecommender::new(),
            book_recommender: BookRecommender::new(),
        }
    }

    /// Use a differently configured book recommender (builder pattern)
    pub fn with_book_recommender(mut self, book_recommender: BookRecommender) -> Self {
        self.book_recommender = book_recommender;
        self
    }

    /// Run `query` through every pipeline `mode` selects, in order.
    #[instrument(skip(self))]
    pub async fn run(&self, mode: Mode, query: &str) -> Vec<PipelineReport> {
        let start_time = Instant::now();

        let mut reports = Vec::with_capacity(mode.kinds().len());
        for kind in mode.kinds() {
            let report = match kind {
                MediaKind::Book => self.run_books(query).await,
                MediaKind::Movie => self.run_movies(query).await,
            };
            reports.push(report);
        }

        info!("Dispatched '{}' in {:.2?}", query, start_time.elapsed());
        reports
    }

    /// Movie pipeline: search, anchor, trending pool, genre tiers
    #[instrument(skip(self))]
    pub async fn run_movies(&self, query: &str) -> PipelineReport {
        let searched = or_empty(self.movies.search(query).await, "movies", self.movies.name());
        let Some(first) = searched.first() else {
            info!("No movies found for '{}'", query);
            return PipelineReport::no_results(MediaKind::Movie);
        };

        let anchor = Anchor::from_item(first);
        let pool = or_empty(
            self.movies.trending().await,
            "trending movies",
            self.movies.name(),
        );
        let recommendations = self.movie_recommender.recommend(&anchor, &pool);

        info!(
            searched = searched.len(),
            pool = pool.len(),
            recommended = recommendations.len(),
            "Movie pipeline finished"
        );
        PipelineReport {
            kind: MediaKind::Movie,
            outcome: Outcome::Ranked {
                searched,
                recommendations,
            },
        }
    }

    /// Book pipeline: search, anchor, author and category pools, overlap filter
    #[instrument(skip(self))]
    pub async fn run_books(&self, query: &str) -> PipelineReport {
        let searched = or_empty(self.books.search(query).await, "books", self.books.name());
        let Some(first) = searched.first() else {
            info!("No books found for '{}'", query);
            return PipelineReport::no_results(MediaKind::Book);
        };

        let author_pool = or_empty(
            self.books.search_by_authors(&first.authors).await,
            "books by author",
            self.books.name(),
        );
        let category_pool = or_empty(
            self.books.search_by_categories(&first.tags).await,
            "books by category",
            self.books.name(),
        );
        let recommendations = self
            .book_recommender
            .recommend(first, &author_pool, &category_pool);

        info!(
            searched = searched.len(),
            author_pool = author_pool.len(),
            category_pool = category_pool.len(),
            recommended = recommendations.len(),
            "Book pipeline finished"
        );
        PipelineReport {
            kind: MediaKind::Book,
            outcome: Outcome::Ranked {
                searched,
                recommendations,
            },
        }
    }
}
