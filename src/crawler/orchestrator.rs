//! Crawl orchestration: the fetch loop for one site
//!
//! The orchestrator owns the frontier for the whole crawl. Fetches run on a
//! bounded `JoinSet` worker pool; everything else (claiming, link admission,
//! text statistics, embedding, annotation) happens on the orchestrator task,
//! so no shared mutable state exists anywhere in the loop.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::analysis::SimilarityAnalyzer;
use crate::crawler::error::CrawlError;
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::{ContentExtractor, CrawlerConfig, Page, PageContent, SiteCrawlResult};
use crate::embedder::{EmbedError, Embedder};
use crate::text;

/// Crawl one site to completion and return its annotated pages.
///
/// Up to `config.concurrency` fetches run at a time, each wrapped in the
/// configured timeout. Per-page failures (error status, timeout, parse
/// error) are logged and skipped; the URL stays visited and is never
/// retried. Embedding failures abort the site, since relevance and
/// duplicate annotations would be undefined without a complete set of
/// vectors. Once `max_pages` URLs have been claimed no new work starts and
/// in-flight fetches drain normally.
#[instrument(skip_all, fields(seed = %seed))]
pub async fn crawl_site<E, M>(
    seed: &Url,
    extractor: Arc<E>,
    embedder: Arc<M>,
    config: &CrawlerConfig,
) -> Result<SiteCrawlResult, CrawlError>
where
    E: ContentExtractor + 'static,
    M: Embedder + 'static,
{
    let mut frontier = Frontier::new(seed, config);
    let mut tasks: JoinSet<(FrontierEntry, Result<PageContent, CrawlError>)> = JoinSet::new();
    let mut pages: Vec<Page> = Vec::new();

    loop {
        // Keep the pool full; the frontier stops yielding at max_pages.
        while tasks.len() < config.concurrency {
            let Some(entry) = frontier.claim_next() else {
                break;
            };
            debug!(url = %entry.url, depth = entry.depth, "fetching");
            let extractor = Arc::clone(&extractor);
            let request_timeout = config.request_timeout;
            tasks.spawn(async move {
                let result =
                    match tokio::time::timeout(request_timeout, extractor.fetch(entry.url.as_str()))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(CrawlError::Timeout(entry.url.to_string())),
                    };
                (entry, result)
            });
        }

        let Some(joined) = tasks.join_next().await else {
            break;
        };
        let (entry, result) =
            joined.map_err(|e| CrawlError::Other(format!("fetch task failed: {e}")))?;

        match result {
            Ok(content) => {
                // Text-less pages are skipped entirely; their links do not
                // enter the frontier.
                if content.is_empty() {
                    debug!(url = %entry.url, "no extractable text");
                    continue;
                }
                frontier.extend(&entry.url, &content.links, entry.depth + 1);

                let embedding = embedder
                    .embed(&content.text)
                    .await
                    .map_err(|e| CrawlError::Embedding(e.to_string()))?;
                if embedding.len() != embedder.dimensions() {
                    let mismatch = EmbedError::DimensionMismatch {
                        expected: embedder.dimensions(),
                        actual: embedding.len(),
                    };
                    return Err(CrawlError::Embedding(mismatch.to_string()));
                }

                pages.push(Page {
                    url: entry.url.to_string(),
                    title: content.title,
                    word_count: text::word_count(&content.text),
                    sentence_count: text::sentence_count(&content.text),
                    top_keywords: text::top_keywords(&content.text),
                    embedding,
                    raw_text: content.text,
                    relevance_score: 0.0,
                    is_duplicate: false,
                });
            }
            Err(err) if err.is_page_local() => {
                warn!(url = %entry.url, error = %err, "fetch failed, skipping page");
            }
            Err(err) => return Err(err),
        }
    }

    SimilarityAnalyzer::new(config.duplicate_threshold).annotate(&mut pages);

    info!(
        host = frontier.seed_host(),
        pages = pages.len(),
        visited = frontier.visited_count(),
        "crawl complete"
    );
    Ok(SiteCrawlResult {
        seed_url: seed.to_string(),
        host: frontier.seed_host().to_string(),
        pages,
        visited_count: frontier.visited_count(),
    })
}
