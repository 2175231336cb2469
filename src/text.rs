//! Token statistics over extracted page text
//!
//! Provides the word/sentence counts and the top-keyword extraction the
//! orchestrator attaches to every page record.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// How many keywords a page record carries
pub const TOP_KEYWORD_COUNT: usize = 5;

/// Minimum token length for keyword extraction
const MIN_KEYWORD_LEN: usize = 4;

fn keyword_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]{4,}").expect("keyword token pattern is valid"))
}

/// Whitespace-separated token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of non-blank segments terminated by `.`, `!`, or `?`
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// The most frequent alphabetic tokens of length >= 4, case-insensitive.
///
/// Returns up to [`TOP_KEYWORD_COUNT`] keywords ordered by descending
/// frequency, with ties broken by first appearance in the text.
pub fn top_keywords(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in keyword_token_re().find_iter(text).enumerate() {
        let word = token.as_str().to_lowercase();
        debug_assert!(word.len() >= MIN_KEYWORD_LEN);
        let entry = counts.entry(word).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(TOP_KEYWORD_COUNT);
    ranked.into_iter().map(|(word, _, _)| word).collect()
}
