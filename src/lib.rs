//! XChain scoring core (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! Three independent, stateless components. Each takes a validated input type
//! and returns a plain value; the only failure is a [`ValidationError`] raised
//! while building the input.
//!
//! ## Scoring
//! - [`ValuationEstimator`] - fair price and confidence from rarity, volume and social signals
//! - [`SimilarityRanker`] - decaying pseudo-neighbor list for an embedding
//! - [`FraudScorer`] - additive risk score and action flag
//!
//! ## Inputs & Outputs
//! - `*Request` types mirror the JSON wire format and are unchecked
//! - `*Input` types are only constructible through validating constructors
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `XCHAIN_AI_*` environment settings

pub mod config;
pub mod constants;
pub mod fraud;
pub mod similarity;
pub mod validation;
pub mod valuation;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_TOP_K, MAX_TOP_K, MIN_TOP_K};
pub use fraud::{FraudAssessment, FraudFlag, FraudInput, FraudRequest, FraudScorer};
pub use similarity::{SimilarityInput, SimilarityMatch, SimilarityRanker, SimilarityRequest};
pub use validation::ValidationError;
pub use valuation::{
    ValuationEstimator, ValuationFeatures, ValuationInput, ValuationOutput, ValuationRequest,
};
