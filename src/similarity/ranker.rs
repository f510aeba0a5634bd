use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constants::{SIMILARITY_MAX_JITTER, SIMILARITY_RANK_DECAY};

use super::types::{SimilarityInput, SimilarityMatch};

/// Produces a decaying, jittered list of pseudo-neighbors for a token.
///
/// No index is consulted: the score for rank `i` is
/// `max(0, 1 - 0.1 * i + jitter_i)` with `jitter_i` uniform in `[0, 0.05)`.
/// The generator is seeded from the embedding length only, so equal-length
/// embeddings always yield the same jitter sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker;

impl SimilarityRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, input: &SimilarityInput) -> Vec<SimilarityMatch> {
        // Owned per call; never shared between requests.
        let mut rng = StdRng::seed_from_u64(input.embedding().len() as u64);

        let matches: Vec<SimilarityMatch> = (0..input.top_k())
            .map(|rank| {
                let jitter = rng.random::<f64>() * SIMILARITY_MAX_JITTER;
                let score = (1.0 - rank as f64 * SIMILARITY_RANK_DECAY + jitter).max(0.0);
                SimilarityMatch {
                    token_pk: neighbor_id(input.token_pk(), rank),
                    score,
                }
            })
            .collect();

        debug!(
            token_pk = input.token_pk(),
            embedding_len = input.embedding().len(),
            top_k = input.top_k(),
            "Similarity ranked"
        );

        matches
    }
}

/// Synthetic identifier for the neighbor at `rank`.
#[inline]
pub fn neighbor_id(token_pk: &str, rank: u32) -> String {
    format!("{}-sim-{}", token_pk, rank)
}
