use std::sync::Arc;

use common::{error::AppError, storage::db::SurrealDbClient, utils::config::AppConfig};
use tracing::warn;

#[derive(Clone)]
pub struct ApiState {
    pub db: Option<Arc<SurrealDbClient>>,
    pub config: AppConfig,
}

impl ApiState {
    /// Connects to SurrealDB when the config names a target. Without one the
    /// state carries no client: the survey is still served, submissions fail
    /// with a storage error and `/test` reports the unconfigured store.
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        let db = match config.surrealdb_target() {
            Some((address, database)) => {
                let client = SurrealDbClient::new(
                    address,
                    &config.surrealdb_username,
                    &config.surrealdb_password,
                    &config.surrealdb_namespace,
                    database,
                )
                .await?;

                client.ensure_initialized().await?;

                Some(Arc::new(client))
            }
            None => {
                warn!(
                    "SURREALDB_ADDRESS / SURREALDB_DATABASE not set, running without persistence"
                );
                None
            }
        };

        Ok(Self {
            db,
            config: config.clone(),
        })
    }
}
