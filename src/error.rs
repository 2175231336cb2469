//! Error types for the siteaudit crate

use thiserror::Error;

/// Result type for siteaudit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for siteaudit operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Web crawling error
    #[error("Crawl error: {0}")]
    Crawl(String),

    /// Embedding error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Startup configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Result export error
    #[error("Report error: {0}")]
    Report(String),
}
