//! HTTP gateway (Axum) for the scoring endpoints.
//!
//! Handlers only marshal JSON into validated inputs and back; all scoring
//! logic lives in the `xchain` crate.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

pub use handler::{fraud_score_handler, similarity_handler, valuation_handler};
pub use state::HandlerState;

/// Caller-supplied key, echoed back on the response and recorded on the request span.
pub const IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";
/// Short machine-readable outcome attached to error responses.
pub const XCHAIN_STATUS_HEADER: &str = "x-xchain-status";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/valuation", post(valuation_handler))
        .route("/similarity", post(similarity_handler))
        .route("/fraud-score", post(fraud_score_handler))
        .layer(middleware::from_fn(echo_idempotency_key))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ts: DateTime<Utc>,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            ts: Utc::now(),
        }),
    )
        .into_response()
}

/// Copies `x-idempotency-key` from the request onto the response, success or not.
pub async fn echo_idempotency_key(request: Request, next: Next) -> Response {
    let key = request.headers().get(IDEMPOTENCY_KEY_HEADER).cloned();

    let mut response = next.run(request).await;
    if let Some(key) = key {
        response.headers_mut().insert(IDEMPOTENCY_KEY_HEADER, key);
    }
    response
}
