use api_state::ApiState;
use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use routes::{
    diagnostics::diagnostics, root::root, submit::submit_survey, survey::get_survey,
};
use tower_http::cors::CorsLayer;

pub mod api_state;
pub mod client_meta;
pub mod error;
mod routes;

/// Full HTTP surface of the survey backend.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new()
        .route("/", get(root))
        .route("/api/survey", get(get_survey))
        .route("/api/survey/submit", post(submit_survey))
        .route("/test", get(diagnostics))
        .layer(CorsLayer::permissive())
}
