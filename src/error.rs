//! Error types shared by the library.
//!
//! Two layers exist. [`CatalogError`] describes the failure of one HTTP call
//! against the Spotify Web API (or the token endpoint). [`Error`] describes the
//! failure of a whole operation and carries enough context (seeds, mood, query)
//! to tell a broken upstream apart from a search that simply found nothing.

use thiserror::Error;

/// Failure of a single call against the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The access token could not be obtained or refreshed.
    #[error("authentication failed: {0}")]
    Auth(String),
}

impl CatalogError {
    /// HTTP status of an API error, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Api { status, .. } => Some(*status),
            CatalogError::Transport { source, .. } | CatalogError::Decode { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            CatalogError::Auth(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failure of a library operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A call marked as hard-fail could not be completed.
    #[error("{operation} failed (seeds: {seeds}, mood: {mood}): {source}")]
    UpstreamUnavailable {
        operation: &'static str,
        seeds: String,
        mood: String,
        #[source]
        source: CatalogError,
    },

    /// The catalog is reachable but returned no candidates at all.
    #[error("no tracks found with search query: {query} (mood: {mood})")]
    NoCandidates { query: String, mood: String },

    #[error("{kind} with ID '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Catalog(e) => e.is_not_found(),
            _ => false,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
