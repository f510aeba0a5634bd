use tracing::debug;

use crate::constants::{
    FRAUD_BLOCK_THRESHOLD, FRAUD_DUPLICATE_TX_CAP, FRAUD_DUPLICATE_TX_WEIGHT, FRAUD_MAX_RISK,
    FRAUD_METADATA_WEIGHT, FRAUD_MONITOR_THRESHOLD, FRAUD_NEW_COLLECTION_DAYS,
    FRAUD_NEW_COLLECTION_WEIGHT, FRAUD_PRICE_THRESHOLD, FRAUD_PRICE_WEIGHT, FRAUD_SCORE_DECIMALS,
    round_to,
};

use super::types::{FraudAssessment, FraudFlag, FraudInput};

/// Additive risk scorer.
///
/// | Signal | Contribution |
/// |---|---|
/// | `price > 20` | 0.25 |
/// | `collection_age_days < 30` | 0.30 |
/// | `suspicious_metadata` | 0.20 |
/// | duplicate transactions | `min(0.25, count * 0.05)` |
#[derive(Debug, Clone, Copy, Default)]
pub struct FraudScorer;

impl FraudScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, input: &FraudInput) -> FraudAssessment {
        let risk = self.risk(input);
        let flag = classify(risk);

        debug!(
            entity_type = input.entity_type(),
            entity_id = input.entity_id(),
            risk,
            flag = %flag,
            "Fraud risk assessed"
        );

        FraudAssessment {
            flag,
            score: round_to(risk, FRAUD_SCORE_DECIMALS),
            reason: flag.reason().to_string(),
        }
    }

    /// Unrounded risk, clamped to `[0, 1]`.
    pub fn risk(&self, input: &FraudInput) -> f64 {
        let mut risk = 0.0;

        if input.price() > FRAUD_PRICE_THRESHOLD {
            risk += FRAUD_PRICE_WEIGHT;
        }
        if input.collection_age_days() < FRAUD_NEW_COLLECTION_DAYS {
            risk += FRAUD_NEW_COLLECTION_WEIGHT;
        }
        if input.suspicious_metadata() {
            risk += FRAUD_METADATA_WEIGHT;
        }
        risk += duplicate_tx_contribution(input.duplicate_tx_count());

        risk.min(FRAUD_MAX_RISK)
    }
}

/// `count * 0.05`, capped at 0.25; negative counts contribute nothing.
#[inline]
pub fn duplicate_tx_contribution(count: i64) -> f64 {
    (count.max(0) as f64 * FRAUD_DUPLICATE_TX_WEIGHT).min(FRAUD_DUPLICATE_TX_CAP)
}

/// Maps a risk value onto its action bucket, highest threshold first.
pub fn classify(risk: f64) -> FraudFlag {
    if risk >= FRAUD_BLOCK_THRESHOLD {
        FraudFlag::Block
    } else if risk >= FRAUD_MONITOR_THRESHOLD {
        FraudFlag::Monitor
    } else {
        FraudFlag::Review
    }
}
