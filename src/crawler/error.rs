//! Error types for the crawler module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fetch failed with an HTTP error status
    #[error("fetch failed for {url}: status {status}")]
    Fetch {
        /// URL that failed
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Request did not complete within the configured timeout
    #[error("fetch timed out for {0}")]
    Timeout(String),

    /// Markup could not be processed
    #[error("parse error for {url}: {message}")]
    Parse {
        /// URL whose document failed to parse
        url: String,
        /// What went wrong
        message: String,
    },

    /// Embedding the site's pages failed; scoring is undefined
    #[error("embedding error: {0}")]
    Embedding(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CrawlError {
    /// True for per-page failures that the crawl recovers from locally
    pub fn is_page_local(&self) -> bool {
        matches!(
            self,
            CrawlError::Http(_)
                | CrawlError::Fetch { .. }
                | CrawlError::Timeout(_)
                | CrawlError::Parse { .. }
        )
    }
}

impl From<CrawlError> for CrateError {
    fn from(err: CrawlError) -> Self {
        match err {
            CrawlError::Http(e) => CrateError::Http(e),
            CrawlError::Embedding(e) => CrateError::Embedding(e),
            _ => CrateError::Crawl(err.to_string()),
        }
    }
}
