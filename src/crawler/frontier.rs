//! Frontier management: admissibility, ordering, and the visited set
//!
//! The frontier owns the pending queue and the visited set for one site
//! crawl. It is single-owner: only the orchestrator task touches it, so
//! claim-and-mark-visited is atomic by construction and two workers can
//! never race on the same URL.

use std::collections::{HashSet, VecDeque};

use tracing::trace;
use url::Url;

use crate::crawler::config::{CrawlerConfig, FrontierMode};
use crate::crawler::DiscoveredLink;

/// Keywords that mark a link as pointing at high-value catalog content
const HIGH_VALUE_KEYWORDS: &[&str] = &[
    "course",
    "program",
    "degree",
    "curriculum",
    "syllabus",
    "major",
    "bachelor",
    "master",
    "phd",
    "diploma",
    "certificate",
];

/// Keywords that mark a URL path as part of an academic section
const ACADEMIC_SECTION_KEYWORDS: &[&str] = &[
    "academic",
    "admission",
    "department",
    "school",
    "faculty",
    "study",
    "education",
    "undergraduate",
    "graduate",
];

/// A discovered-but-not-yet-fetched URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Canonical URL to fetch
    pub url: Url,

    /// Link depth from the seed
    pub depth: u32,

    /// Ordering hint, 3 (best) down to 0
    pub priority: u8,
}

/// Resolve a possibly-relative href against `base` into a canonical URL.
///
/// The canonical form is scheme+host+path+query with the fragment removed,
/// so URLs differing only by fragment collapse to the same entry. Non-http(s)
/// schemes (`javascript:`, `mailto:`, `tel:`) are rejected. Idempotent:
/// canonicalizing a canonical URL returns it unchanged.
pub fn canonicalize(href: &str, base: &Url) -> Option<Url> {
    let mut url = base.join(href.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}

/// Ordering hint for a discovered link.
///
/// Returns 3 when the URL or anchor text contains a high-value keyword
/// (course/program/degree terms), 2 when the URL path sits in an academic
/// section, and 1 otherwise. 0 is reserved for explicitly deprioritized
/// entries and is never produced here.
pub fn link_priority(url: &Url, link_text: &str) -> u8 {
    let url_lower = url.as_str().to_lowercase();
    let text_lower = link_text.to_lowercase();
    if HIGH_VALUE_KEYWORDS
        .iter()
        .any(|kw| url_lower.contains(kw) || text_lower.contains(kw))
    {
        return 3;
    }
    let path_lower = url.path().to_lowercase();
    if ACADEMIC_SECTION_KEYWORDS
        .iter()
        .any(|kw| path_lower.contains(kw))
    {
        return 2;
    }
    1
}

/// Pending queue plus visited set for one site crawl
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    /// Canonical URLs already dequeued for fetching; grows monotonically
    visited: HashSet<String>,
    /// Canonical URLs currently waiting in the queue
    pending: HashSet<String>,
    seed_host: String,
    skip_patterns: Vec<String>,
    mode: FrontierMode,
    max_pages: usize,
    max_depth: u32,
    claimed: usize,
}

impl Frontier {
    /// Build a frontier scoped to the seed's host, with the seed enqueued
    /// at depth zero.
    pub fn new(seed: &Url, config: &CrawlerConfig) -> Self {
        let mut seed = seed.clone();
        seed.set_fragment(None);
        let seed_host = seed.host_str().unwrap_or_default().to_string();

        let mut frontier = Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            pending: HashSet::new(),
            seed_host,
            skip_patterns: config
                .skip_patterns
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            mode: config.frontier_mode,
            max_pages: config.max_pages,
            max_depth: config.max_depth,
            claimed: 0,
        };

        frontier.pending.insert(seed.as_str().to_string());
        frontier.queue.push_back(FrontierEntry {
            priority: link_priority(&seed, ""),
            url: seed,
            depth: 0,
        });
        frontier
    }

    /// Host this crawl is scoped to
    pub fn seed_host(&self) -> &str {
        &self.seed_host
    }

    /// Number of URLs dequeued for fetching so far
    pub fn visited_count(&self) -> usize {
        self.claimed
    }

    /// True when nothing is waiting to be fetched
    pub fn is_drained(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether a canonical URL may enter the frontier: same host as the
    /// seed (exact match, no subdomains) and no skip-pattern hit.
    pub fn is_admissible(&self, url: &Url) -> bool {
        if url.host_str() != Some(self.seed_host.as_str()) {
            return false;
        }
        let url_lower = url.as_str().to_lowercase();
        !self
            .skip_patterns
            .iter()
            .any(|pattern| url_lower.contains(pattern))
    }

    /// Dequeue the next URL to fetch and mark it visited.
    ///
    /// Skips entries that were visited while queued and entries beyond the
    /// depth budget. Returns `None` once the queue is empty or the page
    /// budget is spent; after that the frontier never yields again.
    pub fn claim_next(&mut self) -> Option<FrontierEntry> {
        while self.claimed < self.max_pages {
            let entry = self.queue.pop_front()?;
            let key = entry.url.as_str().to_string();
            self.pending.remove(&key);

            if entry.depth > self.max_depth {
                trace!(url = %entry.url, depth = entry.depth, "dropping over-depth entry");
                continue;
            }
            if !self.visited.insert(key) {
                continue;
            }
            self.claimed += 1;
            return Some(entry);
        }
        None
    }

    /// Feed links discovered on a fetched page back into the frontier.
    ///
    /// Each href is canonicalized against `base`, filtered for
    /// admissibility, and deduplicated against both the visited set and the
    /// queue. In priority mode the admissible candidates of this expansion
    /// step are sorted by descending priority and truncated to `top_k`
    /// before admission; FIFO mode admits all of them in discovery order.
    pub fn extend(&mut self, base: &Url, links: &[DiscoveredLink], depth: u32) {
        if depth > self.max_depth {
            return;
        }

        let mut candidates = Vec::new();
        for link in links {
            let Some(url) = canonicalize(&link.href, base) else {
                continue;
            };
            if !self.is_admissible(&url) {
                continue;
            }
            let key = url.as_str();
            if self.visited.contains(key) || self.pending.contains(key) {
                continue;
            }
            // Dedupe within this expansion step as well.
            if candidates
                .iter()
                .any(|c: &FrontierEntry| c.url.as_str() == key)
            {
                continue;
            }
            candidates.push(FrontierEntry {
                priority: link_priority(&url, &link.text),
                url,
                depth,
            });
        }

        if let FrontierMode::Priority { top_k } = self.mode {
            candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
            candidates.truncate(top_k);
        }

        for entry in candidates {
            self.pending.insert(entry.url.as_str().to_string());
            self.queue.push_back(entry);
        }
    }
}
