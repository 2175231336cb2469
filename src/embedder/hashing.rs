//! Deterministic feature-hashing embedder

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::embedder::{EmbedError, Embedder};

/// Default vector length for hashed embeddings
pub const DEFAULT_DIMENSIONS: usize = 256;

/// Offline embedder that hashes alphanumeric tokens into a fixed number of
/// buckets and L2-normalizes the result.
///
/// Pages sharing most of their vocabulary land close together in the vector
/// space, which is all centroid-relevance scoring and near-duplicate
/// detection need. The same text always yields the same vector; empty text
/// yields the zero vector.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    /// Create an embedder producing vectors of the given length
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl Embedder for HashingEmbedder {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let mut vector = vec![0.0f32; self.dimensions];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            // DefaultHasher::new() uses fixed keys, so bucket assignment is
            // stable across runs and processes.
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in vector.iter_mut() {
                *v /= norm;
            }
        }
        Ok(vector)
    }
}
