use chrono::{DateTime, Utc};
use tracing::debug;

use crate::constants::{
    BASELINE_PRICE_FLOOR, BASELINE_VOLUME_DIVISOR, CONFIDENCE_BASE, CONFIDENCE_DECIMALS,
    FEATURE_DECIMALS, MAX_CONFIDENCE, MAX_RARITY_SCORE, MIN_CONFIDENCE, MOMENTUM_WEIGHT,
    PRICE_DECIMALS, RARITY_WEIGHT, SOCIAL_WEIGHT, round_to,
};

use super::types::{ValuationFeatures, ValuationInput, ValuationOutput};

/// Derives a fair price and confidence from rarity, volume and social signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEstimator;

impl ValuationEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimates using the current wall-clock time for `updated_at`.
    pub fn estimate(&self, input: &ValuationInput) -> ValuationOutput {
        self.estimate_at(input, Utc::now())
    }

    /// Estimates with an explicit timestamp; otherwise a pure function of `input`.
    pub fn estimate_at(&self, input: &ValuationInput, now: DateTime<Utc>) -> ValuationOutput {
        let momentum = input.volume_24h().ln_1p() * MOMENTUM_WEIGHT;
        let rarity_boost = input.rarity_score() / MAX_RARITY_SCORE * RARITY_WEIGHT;
        let social_signal = (input.social_mentions() as f64).ln_1p() * SOCIAL_WEIGHT;

        let base_price = input
            .last_sale_price()
            .unwrap_or_else(|| baseline_price(input.volume_24h()));

        let fair_price = base_price * (1.0 + momentum + rarity_boost + social_signal);
        let confidence =
            (CONFIDENCE_BASE + rarity_boost - momentum / 2.0).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        debug!(
            token_pk = input.token_pk(),
            base_price,
            momentum,
            rarity_boost,
            social_signal,
            fair_price,
            confidence,
            "Valuation computed"
        );

        ValuationOutput {
            fair_price: round_to(fair_price, PRICE_DECIMALS),
            confidence: round_to(confidence, CONFIDENCE_DECIMALS),
            updated_at: now,
            features: ValuationFeatures {
                momentum: round_to(momentum, FEATURE_DECIMALS),
                rarity_boost: round_to(rarity_boost, FEATURE_DECIMALS),
                social_signal: round_to(social_signal, FEATURE_DECIMALS),
            },
        }
    }
}

/// Synthetic price for tokens with no recorded sale.
#[inline]
pub fn baseline_price(volume_24h: f64) -> f64 {
    volume_24h / BASELINE_VOLUME_DIVISOR + BASELINE_PRICE_FLOOR
}
