//! # siteaudit - Crawl-and-Rank Content Audit for Websites
//!
//! This crate crawls a set of seed websites, each restricted to its own host,
//! extracts the textual content of every reachable page, and produces a
//! ranked, deduplicated inventory of pages with similarity-based relevance
//! scores. It is aimed at analysts who need a quick content audit or a
//! keyword-matched catalog of pages (e.g. course listings) across sites.
//!
//! ## Pipeline
//!
//! - Website crawling with bounded page/depth budgets and a worker pool
//! - Host-scoped frontier management with FIFO and priority modes
//! - Per-page word/sentence counts and keyword extraction
//! - Deterministic text embeddings via an injected [`embedder::Embedder`]
//! - Centroid-relevance scoring and near-duplicate detection
//! - CSV export of audit and catalog results
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use siteaudit::crawler::{crawl_site, CrawlerConfig, HttpExtractor};
//! use siteaudit::embedder::HashingEmbedder;
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CrawlerConfig::builder().max_pages(50).max_depth(2).build();
//!     let extractor = Arc::new(HttpExtractor::new(&config)?);
//!     let embedder = Arc::new(HashingEmbedder::default());
//!
//!     let seed = Url::parse("https://example.edu")?;
//!     let result = crawl_site(&seed, extractor, embedder, &config).await?;
//!     println!("crawled {} pages", result.pages.len());
//!     Ok(())
//! }
//! ```

mod error;

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod crawler;
pub mod embedder;
pub mod report;
pub mod text;

pub use error::Error;

/// Re-export of common types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}
