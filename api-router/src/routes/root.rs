use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Banner route: a cheap signal that the process is up.
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Survey backend running"})))
}
