#![allow(clippy::module_name_repetitions)]
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::stored_object;

/// One submitted answer as it arrives over the wire. Entries must be JSON
/// objects; the fields inside are stored untouched.
pub type AnswerDocument = Map<String, Value>;

stored_object!(SurveyResponse, "surveyresponse", {
    survey_id: String,
    answers: Vec<AnswerDocument>,
    user_agent: Option<String>,
    ip: Option<String>
});

impl SurveyResponse {
    pub fn new(
        survey_id: String,
        answers: Vec<AnswerDocument>,
        user_agent: Option<String>,
        ip: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            survey_id,
            answers,
            user_agent,
            ip,
        }
    }
}
