//! # Catalog Module
//!
//! The keyword-matched crawl variant: filters a site's crawled pages down
//! to course/program pages, matches them against a user-supplied keyword
//! list, and produces catalog rows ordered by match strength.
//!
//! ## Key Components
//!
//! - `is_target_page`: URL/title test for course-like pages
//! - `infer_degree_level`: doctorate/masters/bachelors/... classification
//! - `match_catalog`: the full filter-and-rank pass over one site's result

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crawler::SiteCrawlResult;

/// URL/title keywords that mark a page as course or program content
const TARGET_PAGE_KEYWORDS: &[&str] = &[
    "course",
    "program",
    "programme",
    "degree",
    "admission",
    "syllabus",
    "curriculum",
    "major",
    "bachelor",
    "master",
    "phd",
    "diploma",
    "certificate",
];

/// How much page text feeds keyword matching and the snippet column
const SNIPPET_CHARS: usize = 500;

/// One catalog row: a course page matched against the user's keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMatch {
    /// Host of the site the page belongs to
    pub university: String,

    /// URL of the matched page
    pub course_page: String,

    /// Title of the matched page
    pub course_title: String,

    /// Inferred degree level, `unspecified` when nothing matches
    pub degree_level: String,

    /// User keywords found in the page, in the user's order
    pub matched_keywords: Vec<String>,

    /// Leading text of the page, capped for readability
    pub description_snippet: String,
}

/// Whether a page looks like course or program content, judged from its
/// URL and title only.
pub fn is_target_page(url: &str, title: &str) -> bool {
    let url_lower = url.to_lowercase();
    let title_lower = title.to_lowercase();
    TARGET_PAGE_KEYWORDS
        .iter()
        .any(|kw| url_lower.contains(kw) || title_lower.contains(kw))
}

/// Classify the degree level from the page title, falling back to the URL.
///
/// Checks the most specific levels first so "PhD in Data Science,
/// Department of Graduate Studies" lands on doctorate.
pub fn infer_degree_level(title: &str, url: &str) -> &'static str {
    let haystack = format!("{} {}", title.to_lowercase(), url.to_lowercase());
    if ["phd", "ph.d", "doctor"].iter().any(|kw| haystack.contains(kw)) {
        return "doctorate";
    }
    if haystack.contains("master") {
        return "masters";
    }
    if haystack.contains("bachelor") || haystack.contains("undergraduate") {
        return "bachelors";
    }
    if haystack.contains("diploma") {
        return "diploma";
    }
    if haystack.contains("certificate") {
        return "certificate";
    }
    "unspecified"
}

/// Match one site's crawled pages against the user's keyword list.
///
/// Only target pages participate. A page is matched against
/// title + leading text (case-insensitive substring per keyword); pages
/// with zero matches are discarded. Rows are ordered by descending match
/// count, ties broken by ascending title.
pub fn match_catalog(result: &SiteCrawlResult, keywords: &[String]) -> Vec<CourseMatch> {
    let mut matches: Vec<CourseMatch> = Vec::new();

    for page in &result.pages {
        if !is_target_page(&page.url, &page.title) {
            continue;
        }

        let snippet: String = page.raw_text.chars().take(SNIPPET_CHARS).collect();
        let haystack = format!("{} {}", page.title, snippet).to_lowercase();
        let matched: Vec<String> = keywords
            .iter()
            .filter(|kw| haystack.contains(&kw.to_lowercase()))
            .cloned()
            .collect();
        if matched.is_empty() {
            continue;
        }

        matches.push(CourseMatch {
            university: result.host.clone(),
            course_page: page.url.clone(),
            course_title: page.title.clone(),
            degree_level: infer_degree_level(&page.title, &page.url).to_string(),
            matched_keywords: matched,
            description_snippet: snippet,
        });
    }

    matches.sort_by(|a, b| {
        b.matched_keywords
            .len()
            .cmp(&a.matched_keywords.len())
            .then_with(|| a.course_title.cmp(&b.course_title))
    });

    debug!(
        host = %result.host,
        pages = result.pages.len(),
        matches = matches.len(),
        "catalog matching complete"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::Page;

    fn page(url: &str, title: &str, text: &str) -> Page {
        Page {
            url: url.to_string(),
            title: title.to_string(),
            raw_text: text.to_string(),
            word_count: 0,
            sentence_count: 0,
            top_keywords: Vec::new(),
            embedding: Vec::new(),
            relevance_score: 0.0,
            is_duplicate: false,
        }
    }

    fn site(pages: Vec<Page>) -> SiteCrawlResult {
        SiteCrawlResult {
            seed_url: "https://example.edu/".to_string(),
            host: "example.edu".to_string(),
            visited_count: pages.len(),
            pages,
        }
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_course_pages_are_targets_and_menus_are_not() {
        assert!(is_target_page(
            "https://example.edu/programs/ai",
            "Master of AI Engineering"
        ));
        assert!(is_target_page("https://example.edu/courses/cs101", ""));
        assert!(!is_target_page(
            "https://example.edu/dining",
            "Campus Cafeteria Menu"
        ));
    }

    #[test]
    fn test_keyword_match_retains_and_discards() {
        let result = site(vec![
            page(
                "https://example.edu/programs/ai",
                "Master of AI Engineering",
                "Two-year program in artificial intelligence.",
            ),
            page(
                "https://example.edu/dining",
                "Campus Cafeteria Menu",
                "Daily specials and AI-free sandwiches.",
            ),
        ]);

        let matches = match_catalog(&result, &kw(&["ai"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].course_title, "Master of AI Engineering");
        assert_eq!(matches[0].matched_keywords, vec!["ai"]);
        assert_eq!(matches[0].degree_level, "masters");
    }

    #[test]
    fn test_target_pages_without_keyword_hits_are_discarded() {
        let result = site(vec![page(
            "https://example.edu/courses/history",
            "History of Art",
            "Renaissance painting and sculpture.",
        )]);
        assert!(match_catalog(&result, &kw(&["robotics"])).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = site(vec![page(
            "https://example.edu/courses/ml",
            "MACHINE LEARNING COURSE",
            "",
        )]);
        let matches = match_catalog(&result, &kw(&["machine learning"]));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_snippet_matching_is_capped() {
        let padding = "x".repeat(600);
        let text = format!("{padding} robotics appears too late");
        let result = site(vec![page(
            "https://example.edu/courses/robotics",
            "Untitled Course",
            &text,
        )]);
        // The keyword sits past the snippet cap, so it cannot match.
        assert!(match_catalog(&result, &kw(&["robotics"])).is_empty());
    }

    #[test]
    fn test_degree_level_inference() {
        assert_eq!(infer_degree_level("PhD in Physics", ""), "doctorate");
        assert_eq!(infer_degree_level("Master of AI Engineering", ""), "masters");
        assert_eq!(
            infer_degree_level("", "https://example.edu/undergraduate/cs"),
            "bachelors"
        );
        assert_eq!(infer_degree_level("Graduate Diploma in Law", ""), "diploma");
        assert_eq!(
            infer_degree_level("Certificate in Welding", ""),
            "certificate"
        );
        assert_eq!(infer_degree_level("Short Course: Pottery", ""), "unspecified");
    }

    #[test]
    fn test_rows_are_ordered_by_match_count_then_title() {
        let result = site(vec![
            page(
                "https://example.edu/courses/b",
                "Zeta Program",
                "data systems",
            ),
            page(
                "https://example.edu/courses/a",
                "Alpha Program",
                "data systems",
            ),
            page(
                "https://example.edu/courses/c",
                "Beta Program",
                "data only here",
            ),
        ]);

        let matches = match_catalog(&result, &kw(&["data", "systems"]));
        let titles: Vec<&str> = matches.iter().map(|m| m.course_title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha Program", "Zeta Program", "Beta Program"]);
    }
}
