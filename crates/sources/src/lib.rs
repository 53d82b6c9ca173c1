//! # Sources Crate
//!
//! Catalog clients that supply search results and candidate pools.
//!
//! ## Components
//!
//! ### TMDB (movies)
//! - Free-text title search
//! - Popular feed used as the movie candidate pool
//! - Genre ids resolved to display names before items leave the client
//!
//! ### Google Books (books)
//! - Free-text search
//! - Author (`inauthor:`) and category (`subject:`) searches used as the
//!   book candidate pools
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{BookCatalog, GoogleBooksClient, MovieCatalog, TmdbClient};
//!
//! let movies = TmdbClient::new(token, "https://api.themoviedb.org/3");
//! let searched = movies.search("Heat").await?;
//! let pool = movies.trending().await?;
//!
//! let books = GoogleBooksClient::new(key, "https://www.googleapis.com/books/v1/volumes");
//! let by_author = books.search_by_authors(&searched_book.authors).await?;
//! ```

// Public modules
pub mod error;
pub mod google_books;
pub mod tmdb;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{SourceError, SourceResult};
pub use google_books::GoogleBooksClient;
pub use tmdb::TmdbClient;
pub use traits::{BookCatalog, MovieCatalog};
pub use types::{Candidate, CandidateSource};
