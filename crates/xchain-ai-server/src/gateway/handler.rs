use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use xchain::{
    FraudInput, FraudRequest, SimilarityRequest, ValidationError, ValuationInput, ValuationRequest,
};

use crate::gateway::IDEMPOTENCY_KEY_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;

#[instrument(
    skip(state, headers, payload),
    fields(token_pk = tracing::field::Empty, idempotency_key = tracing::field::Empty)
)]
pub async fn valuation_handler(
    State(state): State<HandlerState>,
    headers: HeaderMap,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    record_idempotency_key(&headers);
    let request: ValuationRequest = parse_request(payload)?;
    tracing::Span::current().record("token_pk", tracing::field::display(&request.token_pk));

    let input = ValuationInput::try_from(request).map_err(reject)?;
    let output = state.valuation.estimate(&input);

    Ok(make_response(output))
}

#[instrument(
    skip(state, headers, payload),
    fields(token_pk = tracing::field::Empty, idempotency_key = tracing::field::Empty)
)]
pub async fn similarity_handler(
    State(state): State<HandlerState>,
    headers: HeaderMap,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    record_idempotency_key(&headers);
    let request: SimilarityRequest = parse_request(payload)?;
    tracing::Span::current().record("token_pk", tracing::field::display(&request.token_pk));

    let input = request.into_input(state.default_top_k).map_err(reject)?;
    let matches = state.similarity.rank(&input);

    Ok(make_response(matches))
}

#[instrument(
    skip(state, headers, payload),
    fields(entity_id = tracing::field::Empty, idempotency_key = tracing::field::Empty)
)]
pub async fn fraud_score_handler(
    State(state): State<HandlerState>,
    headers: HeaderMap,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    record_idempotency_key(&headers);
    let request: FraudRequest = parse_request(payload)?;
    tracing::Span::current().record("entity_id", tracing::field::display(&request.entity_id));

    let input = FraudInput::try_from(request).map_err(reject)?;
    let assessment = state.fraud.assess(&input);

    Ok(make_response(assessment))
}

/// Deserializes the JSON body into a wire request, mapping every failure to `400`.
pub(crate) fn parse_request<T: DeserializeOwned>(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<T, GatewayError> {
    let Json(value) =
        payload.map_err(|e| GatewayError::InvalidRequest(format!("Invalid JSON body: {}", e)))?;

    serde_json::from_value(value)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

pub(crate) fn make_response<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn reject(err: ValidationError) -> GatewayError {
    debug!(field = err.field(), error = %err, "Rejected out-of-range request");
    GatewayError::ConstraintViolation(err)
}

fn record_idempotency_key(headers: &HeaderMap) {
    if let Some(key) = headers
        .get(IDEMPOTENCY_KEY_HEADER)
        .and_then(|val| val.to_str().ok())
    {
        tracing::Span::current().record("idempotency_key", key);
    }
}
