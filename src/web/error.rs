use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::signup_service::SignupError;

/// API errors rendered as `{"detail": "..."}` with the matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Conflicts surface as 400, not 409; that is the public contract.
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Conflict(detail) => (StatusCode::BAD_REQUEST, detail),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<SignupError> for ApiError {
    fn from(e: SignupError) -> Self {
        match e {
            SignupError::ActivityNotFound => ApiError::NotFound(e.to_string()),
            SignupError::AlreadySignedUp { .. }
            | SignupError::ActivityFull { .. }
            | SignupError::NotRegistered { .. } => ApiError::Conflict(e.to_string()),
        }
    }
}
