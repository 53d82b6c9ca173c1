//! # Catalog Crate
//!
//! Domain types shared by the movie and book pipelines.
//!
//! ## Main Components
//!
//! - **types**: `CatalogItem`, `MediaKind`, and the movie `GenreMap`
//! - **error**: contract violations for malformed items
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{CatalogItem, MediaKind};
//!
//! let dune = CatalogItem::new(MediaKind::Book, "Dune")
//!     .with_authors(["Frank Herbert"])
//!     .with_tags(["Fiction"]);
//!
//! assert!(dune.tag_set().contains("Fiction"));
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    CatalogItem, GenreId, GenreMap, ItemId, MediaKind, NOT_AVAILABLE, UNKNOWN_GENRE,
};
