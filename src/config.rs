//! # Startup Configuration Module
//!
//! Loads and validates the inputs a run needs before any network activity:
//! the seed URL list and, for catalog runs, the user keyword list. All
//! validation errors here are fatal at startup.

use std::path::Path;

use thiserror::Error;
use tracing::info;
use url::Url;

use crate::error::Error as CrateError;

/// Error type for startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The seeds file contained no usable URLs
    #[error("seed list is empty")]
    EmptySeedList,

    /// The keyword list contained no usable keywords
    #[error("keyword list is empty")]
    EmptyKeywordList,

    /// A seed line could not be parsed as a crawlable URL
    #[error("invalid seed on line {line}: {url} ({reason})")]
    InvalidSeed {
        /// 1-based line number in the seeds file
        line: usize,
        /// The offending line
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The seeds file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CrateError {
    fn from(err: ConfigError) -> Self {
        CrateError::Config(err.to_string())
    }
}

/// Load seed URLs from a file, one per line.
///
/// Blank lines and `#` comments are skipped. Every remaining line must
/// parse as an absolute `http`/`https` URL with a host; the first invalid
/// line fails the whole load.
pub fn load_seeds(path: &Path) -> Result<Vec<Url>, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let mut seeds = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = |reason: &str| ConfigError::InvalidSeed {
            line: index + 1,
            url: line.to_string(),
            reason: reason.to_string(),
        };
        let url = Url::parse(line).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().is_none() {
            return Err(invalid("URL has no host"));
        }
        seeds.push(url);
    }

    if seeds.is_empty() {
        return Err(ConfigError::EmptySeedList);
    }
    info!(count = seeds.len(), path = %path.display(), "loaded seed list");
    Ok(seeds)
}

/// Split a comma-separated keyword argument into trimmed, non-empty
/// keywords, preserving the user's order.
pub fn parse_keywords(raw: &str) -> Result<Vec<String>, ConfigError> {
    let keywords: Vec<String> = raw
        .split(',')
        .map(|kw| kw.trim().to_string())
        .filter(|kw| !kw.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(ConfigError::EmptyKeywordList);
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seeds_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_seeds_skips_comments_and_blanks() {
        let file = seeds_file(
            "# universities\n\nhttps://example.edu/\n  https://other.edu/start  \n",
        );
        let seeds = load_seeds(file.path()).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].as_str(), "https://example.edu/");
        assert_eq!(seeds[1].host_str(), Some("other.edu"));
    }

    #[test]
    fn test_load_seeds_rejects_bad_schemes() {
        let file = seeds_file("ftp://example.edu/\n");
        match load_seeds(file.path()).unwrap_err() {
            ConfigError::InvalidSeed { line, .. } => assert_eq!(line, 1),
            other => panic!("expected invalid seed, got {other:?}"),
        }
    }

    #[test]
    fn test_load_seeds_rejects_relative_urls() {
        let file = seeds_file("https://ok.edu/\n/just/a/path\n");
        match load_seeds(file.path()).unwrap_err() {
            ConfigError::InvalidSeed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected invalid seed, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_seed_file_is_an_error() {
        let file = seeds_file("# nothing here\n\n");
        assert!(matches!(
            load_seeds(file.path()),
            Err(ConfigError::EmptySeedList)
        ));
    }

    #[test]
    fn test_parse_keywords_trims_and_filters() {
        let keywords = parse_keywords(" ai , machine learning ,, robotics ").unwrap();
        assert_eq!(keywords, vec!["ai", "machine learning", "robotics"]);
    }

    #[test]
    fn test_blank_keyword_list_is_an_error() {
        assert!(matches!(
            parse_keywords(" , , "),
            Err(ConfigError::EmptyKeywordList)
        ));
    }
}
