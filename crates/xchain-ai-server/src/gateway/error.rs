use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use xchain::ValidationError;

use super::XCHAIN_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body is not JSON or does not match the request schema.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Body parsed but a field is out of range.
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[from] ValidationError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, xchain_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::ConstraintViolation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "constraint_violation")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            XCHAIN_STATUS_HEADER,
            HeaderValue::from_static(xchain_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
