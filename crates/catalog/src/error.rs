//! Error types for the catalog crate.

use thiserror::Error;

/// Errors raised when a catalog item violates its contract.
///
/// These are programming-contract violations (a collaborator handed us
/// an item without a required field), never "nothing found" conditions.
/// Absence of data is always an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required field was absent or blank
    #[error("Catalog item is missing required field `{field}`")]
    MissingField { field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
