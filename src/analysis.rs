//! # Similarity Analysis Module
//!
//! Post-crawl annotation of page records: centroid-relevance scoring and
//! near-duplicate detection over page embeddings. Both are relative to the
//! whole site's corpus, so the analyzer runs exactly once per site, after
//! the frontier has fully drained.
//!
//! ## Key Components
//!
//! - `cosine_similarity`: the shared similarity primitive
//! - `relevance_scores`: per-page similarity to the site centroid
//! - `duplicate_flags`: pairwise near-duplicate marking
//! - `SimilarityAnalyzer`: bundles both into one annotation pass

use tracing::debug;

use crate::crawler::Page;

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for mismatched lengths or zero-norm inputs, never NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|y| y * y).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Element-wise mean of the embeddings
fn centroid(embeddings: &[&[f32]]) -> Vec<f32> {
    let dims = embeddings.first().map(|e| e.len()).unwrap_or(0);
    let mut mean = vec![0.0f32; dims];
    for embedding in embeddings {
        for (m, v) in mean.iter_mut().zip(embedding.iter()) {
            *m += v;
        }
    }
    let n = embeddings.len() as f32;
    if n > 0.0 {
        for m in mean.iter_mut() {
            *m /= n;
        }
    }
    mean
}

fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

/// Per-page cosine similarity against the site centroid, rounded to four
/// decimal places.
///
/// A single-page site scores 1.0 against its own centroid. Zero-vector
/// embeddings (pages with no extractable text) score 0.0.
pub fn relevance_scores(embeddings: &[&[f32]]) -> Vec<f32> {
    let center = centroid(embeddings);
    embeddings
        .iter()
        .map(|embedding| round4(cosine_similarity(embedding, &center)))
        .collect()
}

/// Marks page `i` when some other page `j` has pairwise similarity strictly
/// above `threshold`. Flags are symmetric, not transitive.
pub fn duplicate_flags(embeddings: &[&[f32]], threshold: f32) -> Vec<bool> {
    let mut flags = vec![false; embeddings.len()];
    for i in 0..embeddings.len() {
        for j in (i + 1)..embeddings.len() {
            if cosine_similarity(embeddings[i], embeddings[j]) > threshold {
                flags[i] = true;
                flags[j] = true;
            }
        }
    }
    flags
}

/// Annotates crawled pages with relevance scores and duplicate flags
#[derive(Debug, Clone)]
pub struct SimilarityAnalyzer {
    duplicate_threshold: f32,
}

impl SimilarityAnalyzer {
    /// Create an analyzer with the given pairwise duplicate threshold
    pub fn new(duplicate_threshold: f32) -> Self {
        Self {
            duplicate_threshold,
        }
    }

    /// Fill in `relevance_score` and `is_duplicate` for every page.
    ///
    /// Quadratic in the page count, which stays cheap at the page budgets
    /// the crawler enforces.
    pub fn annotate(&self, pages: &mut [Page]) {
        let embeddings: Vec<&[f32]> = pages.iter().map(|p| p.embedding.as_slice()).collect();
        let scores = relevance_scores(&embeddings);
        let flags = duplicate_flags(&embeddings, self.duplicate_threshold);
        debug!(
            pages = pages.len(),
            duplicates = flags.iter().filter(|f| **f).count(),
            "annotated site pages"
        );

        for (page, (score, flag)) in pages.iter_mut().zip(scores.into_iter().zip(flags)) {
            page.relevance_score = score;
            page.is_duplicate = flag;
        }
    }
}
