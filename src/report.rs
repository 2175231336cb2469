//! # Report Module
//!
//! CSV export for the two crawl variants. Audit rows carry the per-page
//! statistics and similarity annotations; catalog rows carry the
//! keyword-matched course pages. Writers are generic over `io::Write` so
//! tests can render into a buffer.

use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::catalog::CourseMatch;
use crate::crawler::SiteCrawlResult;
use crate::error::Error as CrateError;

/// Error type for result export
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Embedding column serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying writer error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ReportError> for CrateError {
    fn from(err: ReportError) -> Self {
        CrateError::Report(err.to_string())
    }
}

/// Write the audit inventory for all crawled sites as CSV.
///
/// One row per retained page. List columns are `;`-joined; the embedding
/// is serialized as a JSON float array so downstream tools can parse it
/// without guessing at the dimension.
pub fn write_audit_csv<W: Write>(writer: W, sites: &[SiteCrawlResult]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "ParentSite",
        "URL",
        "Title",
        "WordCount",
        "SentenceCount",
        "TopKeywords",
        "RelevanceScore",
        "IsDuplicate",
        "Embedding",
    ])?;

    let mut rows = 0usize;
    for site in sites {
        for page in &site.pages {
            csv_writer.write_record([
                site.host.as_str(),
                page.url.as_str(),
                page.title.as_str(),
                &page.word_count.to_string(),
                &page.sentence_count.to_string(),
                &page.top_keywords.join(";"),
                &page.relevance_score.to_string(),
                &page.is_duplicate.to_string(),
                &serde_json::to_string(&page.embedding)?,
            ])?;
            rows += 1;
        }
    }
    csv_writer.flush()?;

    info!(sites = sites.len(), rows, "wrote audit report");
    Ok(())
}

/// Write keyword-matched course pages as CSV, one row per match
pub fn write_catalog_csv<W: Write>(writer: W, matches: &[CourseMatch]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "university",
        "course_page",
        "course_title",
        "degree_level",
        "matched_keywords",
        "description_snippet",
    ])?;

    for entry in matches {
        csv_writer.write_record([
            entry.university.as_str(),
            entry.course_page.as_str(),
            entry.course_title.as_str(),
            entry.degree_level.as_str(),
            &entry.matched_keywords.join(";"),
            entry.description_snippet.as_str(),
        ])?;
    }
    csv_writer.flush()?;

    info!(rows = matches.len(), "wrote catalog report");
    Ok(())
}
