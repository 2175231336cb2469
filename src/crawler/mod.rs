//! # Website Crawler Module
//!
//! This module provides the crawl-and-rank engine: frontier management
//! (what to visit, in what order, under what limits), host/skip-pattern
//! filtering, and the fetch loop that assembles per-page records.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: page/depth budgets, worker-pool width, timeouts
//! - `Frontier`: visited set plus pending queue, FIFO or priority-biased
//! - `ContentExtractor` / `HttpExtractor`: URL -> title, text, links
//! - `crawl_site`: drives the fetch loop to completion for one seed
//! - `Page`: the per-page record handed to the similarity analyzer
//!
//! The crawler never crosses the seed's host, never revisits a canonical
//! URL, and terminates within `max_pages` fetches. Relevance scores and
//! duplicate flags are filled in only after the frontier is fully drained,
//! since both are relative to the whole site's corpus.

mod config;
mod error;
mod extractor;
mod frontier;
mod orchestrator;

pub use config::{CrawlerConfig, CrawlerConfigBuilder, FrontierMode};
pub use error::CrawlError;
pub use extractor::{ContentExtractor, HttpExtractor};
pub use frontier::{canonicalize, link_priority, Frontier, FrontierEntry};
pub use orchestrator::crawl_site;

use serde::{Deserialize, Serialize};

/// A crawled page with its content statistics and similarity annotations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Canonical URL of the page
    pub url: String,

    /// Title of the page, empty when the document has none
    pub title: String,

    /// Extracted text with script/style/navigation markup removed
    pub raw_text: String,

    /// Whitespace-separated token count of the text
    pub word_count: usize,

    /// Sentence count of the text
    pub sentence_count: usize,

    /// Most frequent keywords of the page, best first
    pub top_keywords: Vec<String>,

    /// Fixed-dimension embedding of the text; all zeros for empty text
    pub embedding: Vec<f32>,

    /// Cosine similarity to the site centroid, filled in after the crawl
    pub relevance_score: f32,

    /// Whether another page of the site has near-identical content
    pub is_duplicate: bool,
}

/// A link discovered on a fetched page, with its anchor text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredLink {
    /// The href attribute as found in the document, possibly relative
    pub href: String,

    /// Anchor text of the link, used as a priority hint
    pub text: String,
}

/// Content extracted from one fetched document
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Document title
    pub title: String,

    /// Visible text of the document
    pub text: String,

    /// Outbound links found in the document
    pub links: Vec<DiscoveredLink>,
}

impl PageContent {
    /// True when the document yielded no usable text
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The ordered pages collected for one seed URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteCrawlResult {
    /// The seed URL the crawl started from
    pub seed_url: String,

    /// Host the crawl was scoped to
    pub host: String,

    /// Pages in the order they completed extraction
    pub pages: Vec<Page>,

    /// Number of URLs dequeued for fetching, including failed ones
    pub visited_count: usize,
}
