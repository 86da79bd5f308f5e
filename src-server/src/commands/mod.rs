//! Commands Layer
//!
//! HTTP handlers that bridge the `/todos` resource to the repository.

mod todo_cmd;

pub use todo_cmd::*;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// Error body, shaped `{statusCode, message, error}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            DomainError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            DomainError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Malformed JSON, wrong types and unknown fields are all bad input
pub(crate) fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, DomainError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))
}

/// Ids that are not a `u32` are bad input, not a plain-text rejection
pub(crate) fn parse_id(id: Result<Path<u32>, PathRejection>) -> Result<u32, DomainError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))
}
