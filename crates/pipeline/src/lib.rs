//! Recommendation ranking for movies and books.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - MovieRecommender: tiered genre matching over the trending pool
//! - BookRecommender: author/category pools, dedup, relevance filter
//!
//! ## Architecture
//! Both recommenders are pure functions of (anchor, pools):
//! 1. Candidates are tagged with the pool they came from
//! 2. Filters remove the anchor and repeated titles
//! 3. Matching rules (genre tiers, category overlap) select the output
//!
//! Output order always follows the order of the candidate pools.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Anchor, BookRecommender, MovieRecommender};
//!
//! let anchor = Anchor::from_item(&searched_movies[0]);
//! let movies = MovieRecommender::new().recommend(&anchor, &trending);
//!
//! let books = BookRecommender::new()
//!     .recommend(&searched_books[0], &by_author, &by_category);
//! ```

pub mod anchor;
pub mod book;
pub mod filter_pipeline;
pub mod filters;
pub mod movie;
pub mod recommendations;
pub mod traits;

// Re-export main types
pub use anchor::Anchor;
pub use book::BookRecommender;
pub use filter_pipeline::FilterPipeline;
pub use movie::{MatchTier, MovieRecommender, recommend_by_genre};
pub use recommendations::Recommendations;
pub use traits::Filter;
