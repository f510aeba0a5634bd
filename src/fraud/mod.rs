//! Fraud risk scoring.

pub mod scorer;
pub mod types;


pub use scorer::{FraudScorer, classify, duplicate_tx_contribution};
pub use types::{FraudAssessment, FraudFlag, FraudInput, FraudRequest};
