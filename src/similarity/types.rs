use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TOP_K, MIN_TOP_K};
use crate::validation::{ValidationError, require_finite, require_int_in_range};

/// Similarity request as it arrives on the wire.
///
/// `top_k` may be omitted; the gateway substitutes its configured default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub token_pk: String,
    pub embedding: Vec<f64>,
    #[serde(default)]
    pub top_k: Option<i64>,
}

impl SimilarityRequest {
    /// Converts into a validated input, using `default_top_k` when the request has none.
    pub fn into_input(self, default_top_k: u32) -> Result<SimilarityInput, ValidationError> {
        let top_k = match self.top_k {
            Some(top_k) => {
                require_int_in_range("top_k", top_k, MIN_TOP_K as i64, MAX_TOP_K as i64)? as u32
            }
            None => default_top_k,
        };
        SimilarityInput::new(self.token_pk, self.embedding, top_k)
    }
}

/// Validated similarity query.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityInput {
    token_pk: String,
    embedding: Vec<f64>,
    top_k: u32,
}

impl SimilarityInput {
    /// Builds a query; `top_k` must be in `[1, 25]` and the embedding non-empty and finite.
    pub fn new(
        token_pk: impl Into<String>,
        embedding: Vec<f64>,
        top_k: u32,
    ) -> Result<Self, ValidationError> {
        require_int_in_range("top_k", top_k as i64, MIN_TOP_K as i64, MAX_TOP_K as i64)?;
        if embedding.is_empty() {
            return Err(ValidationError::EmptyEmbedding);
        }
        for value in &embedding {
            require_finite("embedding", *value)?;
        }

        Ok(Self {
            token_pk: token_pk.into(),
            embedding,
            top_k,
        })
    }

    pub fn token_pk(&self) -> &str {
        &self.token_pk
    }

    pub fn embedding(&self) -> &[f64] {
        &self.embedding
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }
}

/// One ranked neighbor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    /// Synthetic neighbor id, `"{token_pk}-sim-{rank}"`.
    pub token_pk: String,
    pub score: f64,
}
