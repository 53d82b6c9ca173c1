//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category_overlap;
pub mod dedup_title;
pub mod exclude_anchor;

// Re-export for convenience
pub use category_overlap::{AuthorOrCategoryFilter, CategoryOverlapFilter};
pub use dedup_title::DedupTitleFilter;
pub use exclude_anchor::ExcludeAnchorFilter;
