use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, require_finite};

/// Fraud-score request as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudRequest {
    pub entity_type: String,
    pub entity_id: String,
    pub price: f64,
    pub collection_age_days: i64,
    pub suspicious_metadata: bool,
    pub duplicate_tx_count: i64,
}

/// Validated risk signals for one marketplace entity.
#[derive(Debug, Clone, PartialEq)]
pub struct FraudInput {
    entity_type: String,
    entity_id: String,
    price: f64,
    collection_age_days: i64,
    suspicious_metadata: bool,
    duplicate_tx_count: i64,
}

impl FraudInput {
    pub fn new(
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        price: f64,
        collection_age_days: i64,
        suspicious_metadata: bool,
        duplicate_tx_count: i64,
    ) -> Result<Self, ValidationError> {
        let price = require_finite("price", price)?;
        Ok(Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            price,
            collection_age_days,
            suspicious_metadata,
            duplicate_tx_count,
        })
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn collection_age_days(&self) -> i64 {
        self.collection_age_days
    }

    pub fn suspicious_metadata(&self) -> bool {
        self.suspicious_metadata
    }

    pub fn duplicate_tx_count(&self) -> i64 {
        self.duplicate_tx_count
    }
}

impl TryFrom<FraudRequest> for FraudInput {
    type Error = ValidationError;

    fn try_from(request: FraudRequest) -> Result<Self, Self::Error> {
        Self::new(
            request.entity_type,
            request.entity_id,
            request.price,
            request.collection_age_days,
            request.suspicious_metadata,
            request.duplicate_tx_count,
        )
    }
}

/// Action recommended for a scored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudFlag {
    /// Risk >= 0.70.
    Block,
    /// 0.40 <= risk < 0.70.
    Monitor,
    /// Risk < 0.40.
    Review,
}

impl FraudFlag {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            FraudFlag::Block => "block",
            FraudFlag::Monitor => "monitor",
            FraudFlag::Review => "review",
        }
    }

    /// Fixed explanation for the bucket; it does not name which signals fired.
    #[inline]
    pub fn reason(&self) -> &'static str {
        match self {
            FraudFlag::Block => "High risk: suspicious metadata and pricing anomaly.",
            FraudFlag::Monitor => "Moderate risk: new collection with irregular pricing.",
            FraudFlag::Review => "Baseline checks passed.",
        }
    }
}

impl std::fmt::Display for FraudFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a fraud assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub flag: FraudFlag,
    /// Risk in `[0, 1]`, rounded to 2 decimals.
    pub score: f64,
    pub reason: String,
}
