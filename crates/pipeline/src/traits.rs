//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! swappable filters to be applied to candidate pools.

use crate::anchor::Anchor;
use sources::Candidate;

/// Core trait for filtering candidates.
///
/// Filters are pure: the same candidates and anchor always produce the
/// same output, and a filter may drop candidates but never reorder them.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across async tasks
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - There is no error path; missing data is an empty Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `anchor` - The item recommendations are generated against
    fn apply(&self, candidates: Vec<Candidate>, anchor: &Anchor) -> Vec<Candidate>;
}
