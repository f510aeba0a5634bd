//! Fair-price estimation.
//!
//! The price multiplier is `1 + momentum + rarity_boost + social_signal`:
//!
//! - `momentum = ln(1 + volume_24h) * 0.12`
//! - `rarity_boost = rarity_score / 100 * 0.4`
//! - `social_signal = ln(1 + social_mentions) * 0.05`
//!
//! It is applied to the last sale price, or to `volume_24h / 10 + 0.5` when the
//! token has never sold. Confidence is `0.6 + rarity_boost - momentum / 2`,
//! clamped to `[0.3, 0.95]`.

pub mod estimator;
pub mod types;


pub use estimator::{ValuationEstimator, baseline_price};
pub use types::{ValuationFeatures, ValuationInput, ValuationOutput, ValuationRequest};
