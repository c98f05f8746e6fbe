use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferrisquery_core::domain::common::entities::app_errors::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "E_VALIDATION"),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: i64::from(status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}
