//! Domain errors for the agenda generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by an issue search backend.
///
/// A search error never aborts a run: the category it belongs to is reported
/// as empty instead.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    #[error("Search API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors raised while turning collected activity into a report file.
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("Failed to render agenda template: {0}")]
    Render(String),

    #[error("Failed to write agenda to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type AgendaResult<T> = Result<T, AgendaError>;
