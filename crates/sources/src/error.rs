//! Error types for catalog fetches.

use catalog::CatalogError;
use thiserror::Error;

/// Everything that can go wrong talking to a catalog API.
///
/// The dispatcher turns any of these into an empty result set; they never
/// reach the recommenders.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{service} returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Malformed {service} payload: {reason}")]
    MalformedPayload {
        service: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
