//! # Mock Embedder for Testing
//!
//! Provides a `MockEmbedder` that implements the `Embedder` trait for use
//! in tests. It returns canned vectors keyed by input text, or a forced
//! error to simulate an unavailable backend, without touching any model.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::embedder::{EmbedError, Embedder};

/// A mock embedder returning preset vectors per input text.
///
/// Unknown texts embed to the zero vector. An error can be forced to
/// exercise embedding-failure paths.
#[derive(Debug)]
pub struct MockEmbedder {
    dimensions: usize,
    responses: Mutex<HashMap<String, Vec<f32>>>,
    fail_with: Mutex<Option<String>>,
}

impl MockEmbedder {
    /// Creates a mock producing zero vectors of the given length
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            responses: Mutex::new(HashMap::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Sets the vector to return for a given text
    pub fn set_vector(&self, text: &str, vector: Vec<f32>) {
        let mut responses = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        responses.insert(text.to_string(), vector);
    }

    /// Makes every subsequent `embed` call fail with the given message
    pub fn set_unavailable(&self, message: &str) {
        let mut fail = self
            .fail_with
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *fail = Some(message.to_string());
    }
}

impl Embedder for MockEmbedder {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let fail = self
            .fail_with
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if let Some(message) = fail {
            return Err(EmbedError::Unavailable(message));
        }

        let responses = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(responses
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dimensions]))
    }
}
