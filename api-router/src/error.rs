use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::error::AppError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone)]
pub enum ApiError {
    #[error("Invalid survey id")]
    InvalidSurveyId,

    #[error("Database error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => Self::Storage(e.to_string()),
            AppError::Validation(msg) => Self::ValidationError(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidSurveyId | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage failures keep the underlying message: callers of a survey
        // backend with no auth surface get full visibility instead of a
        // sanitized "internal error".
        let error_response = ErrorResponse {
            error: self.to_string(),
            status: "error".to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

#[derive(Serialize, Debug)]
struct ErrorResponse {
    error: String,
    status: String,
}
