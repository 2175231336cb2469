//! # Embedding Module
//!
//! Text-to-vector embedding behind a trait so the crawl pipeline never
//! depends on a concrete model. The embedder is constructed once at startup
//! and passed by reference into the orchestrator; there is no ambient
//! global model state.
//!
//! ## Key Components
//!
//! - `Embedder`: the trait the orchestrator consumes
//! - `HashingEmbedder`: deterministic, offline feature-hashing embedder
//! - `MockEmbedder`: canned vectors for tests
//!
//! Determinism matters: duplicate detection compares embeddings across
//! pages, so identical input text must always produce identical vectors.
//! Empty text maps to the zero vector, which downstream scoring treats as
//! "no extractable content".

mod hashing;
mod mock;

pub use hashing::{HashingEmbedder, DEFAULT_DIMENSIONS};
pub use mock::MockEmbedder;

use std::future::Future;

use thiserror::Error;

use crate::error::Error as CrateError;

/// Error type for embedding operations
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The embedding backend could not be reached or refused the request
    #[error("embedder unavailable: {0}")]
    Unavailable(String),

    /// The backend returned a vector of the wrong length
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension the embedder advertises
        expected: usize,
        /// Dimension actually returned
        actual: usize,
    },
}

impl From<EmbedError> for CrateError {
    fn from(err: EmbedError) -> Self {
        CrateError::Embedding(err.to_string())
    }
}

/// Maps text to a fixed-dimension vector.
///
/// Implementations must be deterministic for identical input and must
/// return the zero vector for text with no content.
pub trait Embedder: Send + Sync {
    /// Length of every vector this embedder produces
    fn dimensions(&self) -> usize;

    /// Embed one text
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, EmbedError>> + Send;
}
