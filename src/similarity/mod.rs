//! Pseudo-neighbor ranking for a token embedding.
//!
//! The ranker does not search embedding content. It returns `top_k` synthetic
//! neighbors whose scores decay by rank, with reproducible jitter keyed on the
//! embedding length.

pub mod ranker;
pub mod types;


pub use ranker::{SimilarityRanker, neighbor_id};
pub use types::{SimilarityInput, SimilarityMatch, SimilarityRequest};
