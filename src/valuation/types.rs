use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_RARITY_SCORE;
use crate::validation::{
    ValidationError, require_in_range, require_int_in_range, require_non_negative,
};

/// Valuation request as it arrives on the wire.
///
/// Fields are unchecked; convert with [`ValuationInput::try_from`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub token_pk: String,
    #[serde(default)]
    pub last_sale_price: Option<f64>,
    pub rarity_score: f64,
    pub volume_24h: f64,
    pub social_mentions: i64,
}

/// Validated valuation features for a single token.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationInput {
    token_pk: String,
    last_sale_price: Option<f64>,
    rarity_score: f64,
    volume_24h: f64,
    social_mentions: u64,
}

impl ValuationInput {
    /// Builds an input, rejecting out-of-range or non-finite values.
    ///
    /// `rarity_score` must lie in `[0, 100]`, `volume_24h` and a present
    /// `last_sale_price` must be non-negative.
    pub fn new(
        token_pk: impl Into<String>,
        last_sale_price: Option<f64>,
        rarity_score: f64,
        volume_24h: f64,
        social_mentions: u64,
    ) -> Result<Self, ValidationError> {
        let last_sale_price = last_sale_price
            .map(|price| require_non_negative("last_sale_price", price))
            .transpose()?;
        let rarity_score = require_in_range("rarity_score", rarity_score, 0.0, MAX_RARITY_SCORE)?;
        let volume_24h = require_non_negative("volume_24h", volume_24h)?;

        Ok(Self {
            token_pk: token_pk.into(),
            last_sale_price,
            rarity_score,
            volume_24h,
            social_mentions,
        })
    }

    pub fn token_pk(&self) -> &str {
        &self.token_pk
    }

    pub fn last_sale_price(&self) -> Option<f64> {
        self.last_sale_price
    }

    pub fn rarity_score(&self) -> f64 {
        self.rarity_score
    }

    pub fn volume_24h(&self) -> f64 {
        self.volume_24h
    }

    pub fn social_mentions(&self) -> u64 {
        self.social_mentions
    }
}

impl TryFrom<ValuationRequest> for ValuationInput {
    type Error = ValidationError;

    fn try_from(request: ValuationRequest) -> Result<Self, Self::Error> {
        let social_mentions =
            require_int_in_range("social_mentions", request.social_mentions, 0, i64::MAX)?;

        Self::new(
            request.token_pk,
            request.last_sale_price,
            request.rarity_score,
            request.volume_24h,
            social_mentions as u64,
        )
    }
}

/// Per-feature contributions to the price multiplier, each rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationFeatures {
    pub momentum: f64,
    pub rarity_boost: f64,
    pub social_signal: f64,
}

/// Fair-price estimate returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationOutput {
    /// Estimated price, rounded to 4 decimals.
    pub fair_price: f64,
    /// Estimator certainty in `[0.3, 0.95]`, rounded to 2 decimals.
    pub confidence: f64,
    pub updated_at: DateTime<Utc>,
    pub features: ValuationFeatures,
}
