//! Content extraction: URL to title, text, and outbound links
//!
//! The extractor is the crawler's only collaborator that touches the
//! network. Fetch and parse failures are reported as values, never raised
//! past the orchestrator, which treats them as empty content.

use std::future::Future;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::crawler::error::CrawlError;
use crate::crawler::{CrawlerConfig, DiscoveredLink, PageContent};

/// Markup subtrees dropped before collecting page text
const STRIPPED_ELEMENTS: &[&str] = &[
    "head", "script", "style", "nav", "header", "footer", "noscript",
];

/// Fetches a URL and extracts title, visible text, and outbound links
pub trait ContentExtractor: Send + Sync {
    /// Fetch and parse one document.
    ///
    /// A failed fetch returns an error; the orchestrator recovers from it
    /// locally and the URL is never retried.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<PageContent, CrawlError>> + Send;
}

/// HTTP-backed extractor using `reqwest` and `scraper`.
///
/// Sends a fixed User-Agent, applies the configured per-request timeout,
/// keeps no cookies, and never retries. Non-HTML responses yield empty
/// content.
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: reqwest::Client,
}

impl HttpExtractor {
    /// Build an extractor from the crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ContentExtractor for HttpExtractor {
    async fn fetch(&self, url: &str) -> Result<PageContent, CrawlError> {
        debug!("fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.is_empty() && !content_type.contains("html") {
            warn!("skipping non-HTML content at {} ({})", url, content_type);
            return Ok(PageContent::default());
        }

        let body = response.text().await?;
        extract_content(url, &body)
    }
}

/// Parse a document into title, stripped text, and outbound links.
///
/// `url` only labels parse errors; no fetching happens here.
pub fn extract_content(url: &str, html: &str) -> Result<PageContent, CrawlError> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").map_err(|e| CrawlError::Parse {
        url: url.to_string(),
        message: format!("title selector: {e}"),
    })?;
    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let mut text = String::new();
    collect_text(document.root_element(), &mut text);
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let link_selector = Selector::parse("a[href]").map_err(|e| CrawlError::Parse {
        url: url.to_string(),
        message: format!("link selector: {e}"),
    })?;
    let links = document
        .select(&link_selector)
        .filter_map(|el| {
            let href = el.value().attr("href")?.trim();
            if href.is_empty() {
                return None;
            }
            Some(DiscoveredLink {
                href: href.to_string(),
                text: el.text().collect::<String>().trim().to_string(),
            })
        })
        .collect();

    Ok(PageContent { title, text, links })
}

/// Append the visible text under `element`, skipping stripped subtrees
fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if STRIPPED_ELEMENTS.contains(&el.value().name()) {
                continue;
            }
            collect_text(el, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html>
          <head><title> Course Catalog </title><style>body { color: red }</style></head>
          <body>
            <nav><a href="/hidden">Navigation</a>Menu items</nav>
            <script>var tracking = true;</script>
            <h1>Programs</h1>
            <p>Study computer science with us.</p>
            <a href="/courses/cs101">Intro to CS</a>
            <a href="javascript:void(0)">Popup</a>
            <a href="">   </a>
            <footer>Copyright notice</footer>
          </body>
        </html>"#;

    const SAMPLE_URL: &str = "https://example.edu/catalog";

    #[test]
    fn test_title_is_extracted_and_trimmed() {
        let content = extract_content(SAMPLE_URL, SAMPLE).unwrap();
        assert_eq!(content.title, "Course Catalog");
    }

    #[test]
    fn test_text_strips_script_style_nav_and_footer() {
        let content = extract_content(SAMPLE_URL, SAMPLE).unwrap();
        assert!(content.text.contains("Programs"));
        assert!(content.text.contains("Study computer science"));
        assert!(!content.text.contains("tracking"));
        assert!(!content.text.contains("color: red"));
        assert!(!content.text.contains("Menu items"));
        assert!(!content.text.contains("Copyright"));
    }

    #[test]
    fn test_links_keep_anchor_text_and_skip_empty_hrefs() {
        let content = extract_content(SAMPLE_URL, SAMPLE).unwrap();
        let hrefs: Vec<&str> = content.links.iter().map(|l| l.href.as_str()).collect();
        // Scheme filtering happens at canonicalization, not here.
        assert!(hrefs.contains(&"/courses/cs101"));
        assert!(hrefs.contains(&"javascript:void(0)"));
        assert!(!hrefs.contains(&""));

        let course = content
            .links
            .iter()
            .find(|l| l.href == "/courses/cs101")
            .unwrap();
        assert_eq!(course.text, "Intro to CS");
    }

    #[test]
    fn test_parse_errors_name_the_page() {
        let err = CrawlError::Parse {
            url: SAMPLE_URL.to_string(),
            message: "broken selector".to_string(),
        };
        assert!(err.to_string().contains(SAMPLE_URL));
    }

    #[tokio::test]
    async fn test_http_extractor_fetches_and_parses() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><head><title>Hi</title></head><body><p>Hello there</p></body></html>")
            .create_async()
            .await;

        let config = CrawlerConfig::default();
        let extractor = HttpExtractor::new(&config).unwrap();
        let content = extractor
            .fetch(&format!("{}/page", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(content.title, "Hi");
        assert_eq!(content.text, "Hello there");
    }

    #[tokio::test]
    async fn test_http_extractor_reports_error_statuses() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let config = CrawlerConfig::default();
        let extractor = HttpExtractor::new(&config).unwrap();
        let err = extractor
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();

        match err {
            CrawlError::Fetch { status, .. } => assert_eq!(status, 404),
            other => panic!("expected fetch error, got {other:?}"),
        }
        assert!(err.is_page_local());
    }

    #[tokio::test]
    async fn test_http_extractor_skips_non_html_bodies() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{\"not\": \"html\"}")
            .create_async()
            .await;

        let config = CrawlerConfig::default();
        let extractor = HttpExtractor::new(&config).unwrap();
        let content = extractor
            .fetch(&format!("{}/data.json", server.url()))
            .await
            .unwrap();
        assert!(content.is_empty());
    }
}
