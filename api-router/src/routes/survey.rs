use axum::Json;
use common::survey::{preset_survey, Survey};

/// Serves the catalog survey. No error path: the catalog is static and built
/// at first access.
pub async fn get_survey() -> Json<&'static Survey> {
    Json(preset_survey())
}
