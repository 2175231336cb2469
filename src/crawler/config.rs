//! # Crawler Configuration Module
//!
//! This module provides configuration options for the crawler, including
//! the page and depth budgets, worker-pool width, request timeout, and the
//! frontier ordering mode. It uses a builder pattern for flexible
//! configuration.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: the main configuration struct
//! - `CrawlerConfigBuilder`: builder pattern implementation
//! - `FrontierMode`: FIFO versus priority-biased link admission
//!
//! Skip patterns exclude URLs by case-insensitive substring match and
//! default to account/transaction pages that carry no audit value.

use std::time::Duration;

/// Ordering discipline for the crawl frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierMode {
    /// First-discovered, first-visited
    Fifo,

    /// Links are sorted by descending priority per expansion step and only
    /// the best `top_k` are admitted, bounding the branching factor
    Priority {
        /// Maximum links admitted per expansion step
        top_k: usize,
    },
}

impl FrontierMode {
    /// Default admission cap for priority-biased crawls
    pub const DEFAULT_TOP_K: usize = 20;
}

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Maximum number of URLs to dequeue for fetching per site
    pub max_pages: usize,

    /// Maximum link depth from the seed
    pub max_depth: u32,

    /// Number of concurrent fetch workers per site
    pub concurrency: usize,

    /// Per-request timeout; a timed-out fetch counts as a failed fetch
    pub request_timeout: Duration,

    /// User agent sent with every request
    pub user_agent: String,

    /// Case-insensitive URL substrings that exclude a link from the frontier
    pub skip_patterns: Vec<String>,

    /// Frontier ordering mode
    pub frontier_mode: FrontierMode,

    /// Pairwise cosine similarity above which two pages count as duplicates
    pub duplicate_threshold: f32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 100,
            max_depth: 2,
            concurrency: 8,
            request_timeout: Duration::from_secs(10),
            user_agent: format!("siteaudit/{}", env!("CARGO_PKG_VERSION")),
            skip_patterns: vec![
                "login".to_string(),
                "logout".to_string(),
                "signin".to_string(),
                "signup".to_string(),
                "register".to_string(),
                "privacy".to_string(),
                "terms".to_string(),
                "cart".to_string(),
                "checkout".to_string(),
                "account".to_string(),
            ],
            frontier_mode: FrontierMode::Fifo,
            duplicate_threshold: 0.95,
        }
    }
}

/// Builder for CrawlerConfig
#[derive(Debug, Default)]
pub struct CrawlerConfigBuilder {
    config: CrawlerConfig,
}

impl CrawlerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CrawlerConfig::default(),
        }
    }

    /// Set the maximum number of pages to fetch per site
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the maximum link depth from the seed
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set the number of concurrent fetch workers
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.config.request_timeout = request_timeout;
        self
    }

    /// Set the user agent sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the URL substrings that exclude a link from the frontier
    pub fn skip_patterns(mut self, skip_patterns: Vec<String>) -> Self {
        self.config.skip_patterns = skip_patterns;
        self
    }

    /// Set the frontier ordering mode
    pub fn frontier_mode(mut self, frontier_mode: FrontierMode) -> Self {
        self.config.frontier_mode = frontier_mode;
        self
    }

    /// Set the duplicate detection threshold
    pub fn duplicate_threshold(mut self, duplicate_threshold: f32) -> Self {
        self.config.duplicate_threshold = duplicate_threshold;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CrawlerConfig {
        self.config
    }
}

impl CrawlerConfig {
    /// Create a new builder
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::new()
    }
}
