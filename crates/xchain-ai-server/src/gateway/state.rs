use xchain::{Config, FraudScorer, SimilarityRanker, ValuationEstimator};

/// Shared handler state. The scorers are stateless; cloning is free.
#[derive(Debug, Clone)]
pub struct HandlerState {
    pub valuation: ValuationEstimator,

    pub similarity: SimilarityRanker,

    pub fraud: FraudScorer,

    /// `top_k` for similarity requests that omit it.
    pub default_top_k: u32,
}

impl HandlerState {
    pub fn new(default_top_k: u32) -> Self {
        Self {
            valuation: ValuationEstimator::new(),
            similarity: SimilarityRanker::new(),
            fraud: FraudScorer::new(),
            default_top_k,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_top_k)
    }
}

impl Default for HandlerState {
    fn default() -> Self {
        Self::new(xchain::DEFAULT_TOP_K)
    }
}
