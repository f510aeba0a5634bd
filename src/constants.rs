//! Cross-cutting, shared constants.
//!
//! Scoring weights live here rather than next to each algorithm so the gateway,
//! config validation and tests agree on the same bounds.

/// Smallest accepted `top_k` for similarity ranking.
pub const MIN_TOP_K: u32 = 1;
/// Largest accepted `top_k` for similarity ranking.
pub const MAX_TOP_K: u32 = 25;
/// `top_k` used when a similarity request omits it.
pub const DEFAULT_TOP_K: u32 = 5;

/// Upper bound of the normalized rarity score.
pub const MAX_RARITY_SCORE: f64 = 100.0;

pub const MOMENTUM_WEIGHT: f64 = 0.12;
pub const RARITY_WEIGHT: f64 = 0.4;
pub const SOCIAL_WEIGHT: f64 = 0.05;

/// Baseline price is `volume_24h / BASELINE_VOLUME_DIVISOR + BASELINE_PRICE_FLOOR`
/// when the token has never sold.
pub const BASELINE_VOLUME_DIVISOR: f64 = 10.0;
pub const BASELINE_PRICE_FLOOR: f64 = 0.5;

pub const CONFIDENCE_BASE: f64 = 0.6;
pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 0.95;

pub const PRICE_DECIMALS: u32 = 4;
pub const FEATURE_DECIMALS: u32 = 4;
pub const CONFIDENCE_DECIMALS: u32 = 2;

/// Score lost per rank step in the similarity decay curve.
pub const SIMILARITY_RANK_DECAY: f64 = 0.1;
/// Jitter is drawn from `[0, SIMILARITY_MAX_JITTER)`.
pub const SIMILARITY_MAX_JITTER: f64 = 0.05;

pub const FRAUD_PRICE_THRESHOLD: f64 = 20.0;
pub const FRAUD_PRICE_WEIGHT: f64 = 0.25;
pub const FRAUD_NEW_COLLECTION_DAYS: i64 = 30;
pub const FRAUD_NEW_COLLECTION_WEIGHT: f64 = 0.30;
pub const FRAUD_METADATA_WEIGHT: f64 = 0.20;
pub const FRAUD_DUPLICATE_TX_WEIGHT: f64 = 0.05;
pub const FRAUD_DUPLICATE_TX_CAP: f64 = 0.25;
pub const FRAUD_MAX_RISK: f64 = 1.0;
pub const FRAUD_SCORE_DECIMALS: u32 = 2;

pub const FRAUD_BLOCK_THRESHOLD: f64 = 0.70;
pub const FRAUD_MONITOR_THRESHOLD: f64 = 0.40;

/// Rounds the exact binary value to `decimals` places, ties to even.
///
/// Goes through the decimal expansion so values near `f64::MAX` stay finite.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}
