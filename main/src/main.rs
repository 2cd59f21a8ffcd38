use std::net::SocketAddr;

use api_router::{api_routes, api_state::ApiState};
use axum::Router;
use common::utils::config::get_config;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    let api_state = ApiState::new(&config).await?;

    // Create Axum router
    let app: Router = api_routes().with_state(api_state);

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;

    // connect_info is what feeds the submission handler's peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::{storage::db::SurrealDbClient, utils::config::AppConfig};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn smoke_test_config(database: &str) -> AppConfig {
        AppConfig {
            surrealdb_address: Some("mem://".to_string()),
            surrealdb_username: "root".to_string(),
            surrealdb_password: "root".to_string(),
            surrealdb_namespace: "test_ns".to_string(),
            surrealdb_database: Some(database.to_string()),
            http_port: 0,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn smoke_startup_with_in_memory_surrealdb() {
        let database = format!("test_db_{}", Uuid::new_v4());
        let db = Arc::new(
            SurrealDbClient::memory("test_ns", &database)
                .await
                .expect("failed to start in-memory surrealdb"),
        );
        db.ensure_initialized()
            .await
            .expect("failed to initialize schema");

        let api_state = ApiState {
            db: Some(db),
            config: smoke_test_config(&database),
        };

        let app: Router = api_routes().with_state(api_state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);

        let survey_response = app
            .oneshot(
                Request::builder()
                    .uri("/api/survey")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("survey response");
        assert_eq!(survey_response.status(), StatusCode::OK);
    }
}
