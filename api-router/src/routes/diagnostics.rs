use axum::{extract::State, Json};
use serde::Serialize;

use crate::api_state::ApiState;

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Connectivity probe. Every failure mode of the store is returned as data;
/// this endpoint never errors.
pub async fn diagnostics(State(state): State<ApiState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running",
        database: "not configured".to_string(),
        database_url: env_flag("SURREALDB_ADDRESS"),
        database_name: env_flag("SURREALDB_DATABASE"),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    let Some(db) = state.db.as_ref() else {
        return Json(report);
    };

    match db.ping().await {
        Ok(()) => {
            report.connection_status = "connected";
            match db.table_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    report.collections = names;
                    report.database = "connected".to_string();
                }
                Err(e) => {
                    report.database = format!(
                        "connected, but listing collections failed: {}",
                        truncate_error(&e.to_string())
                    );
                }
            }
        }
        Err(e) => {
            report.database = format!("unreachable: {}", truncate_error(&e.to_string()));
        }
    }

    Json(report)
}

fn env_flag(name: &str) -> &'static str {
    if std::env::var(name).is_ok() {
        "set"
    } else {
        "not set"
    }
}

fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
