//! HTTP client helpers for tests.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use xchain::{
    FraudAssessment, FraudRequest, SimilarityMatch, SimilarityRequest, ValuationOutput,
    ValuationRequest,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;
        Self::decode(resp).await
    }

    pub async fn valuation(
        &self,
        request: &ValuationRequest,
    ) -> Result<ValuationOutput, TestClientError> {
        self.post("/valuation", request, None).await
    }

    pub async fn similarity(
        &self,
        request: &SimilarityRequest,
    ) -> Result<Vec<SimilarityMatch>, TestClientError> {
        self.post("/similarity", request, None).await
    }

    pub async fn fraud_score(
        &self,
        request: &FraudRequest,
        idempotency_key: Option<&str>,
    ) -> Result<FraudAssessment, TestClientError> {
        self.post("/fraud-score", request, idempotency_key).await
    }

    async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: Option<&str>,
    ) -> Result<T, TestClientError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let mut builder = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json");
        if let Some(key) = idempotency_key {
            builder = builder.header("x-idempotency-key", key);
        }

        let resp = builder.json(body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 => Err(TestClientError::BadRequest(resp.text().await?)),
            422 => Err(TestClientError::Rejected(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub ts: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rejected: {0}")]
    Rejected(String),
}
