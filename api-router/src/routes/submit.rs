use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use common::{
    error::AppError,
    storage::types::survey_response::{AnswerDocument, SurveyResponse},
    survey::preset_survey,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{api_state::ApiState, client_meta::ClientMeta, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct SubmitPayload {
    pub survey_id: String,
    pub answers: Vec<AnswerDocument>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAck {
    pub status: &'static str,
    pub id: String,
}

/// Validates, enriches and persists one survey response. The answers array
/// is stored exactly as received.
pub async fn submit_survey(
    State(state): State<ApiState>,
    meta: ClientMeta,
    Json(payload): Json<SubmitPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.survey_id != preset_survey().survey_id {
        return Err(ApiError::InvalidSurveyId);
    }

    let Some(db) = state.db.as_ref() else {
        return Err(ApiError::Storage("database is not configured".to_string()));
    };

    let record = SurveyResponse::new(payload.survey_id, payload.answers, meta.user_agent, meta.ip);
    let id = record.id.clone();

    info!(
        response_id = %id,
        answer_count = record.answers.len(),
        "Storing survey response"
    );

    db.store_item(record).await.map_err(AppError::Database)?;

    Ok((StatusCode::OK, Json(SubmitAck { status: "ok", id })))
}
