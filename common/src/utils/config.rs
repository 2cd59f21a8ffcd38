use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub surrealdb_address: Option<String>,
    #[serde(default = "default_credential")]
    pub surrealdb_username: String,
    #[serde(default = "default_credential")]
    pub surrealdb_password: String,
    #[serde(default = "default_namespace")]
    pub surrealdb_namespace: String,
    #[serde(default)]
    pub surrealdb_database: Option<String>,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl AppConfig {
    /// Persistence is considered configured only when both the address and
    /// the database name are present.
    pub fn surrealdb_target(&self) -> Option<(&str, &str)> {
        match (
            self.surrealdb_address.as_deref(),
            self.surrealdb_database.as_deref(),
        ) {
            (Some(address), Some(database)) => Some((address, database)),
            _ => None,
        }
    }
}

fn default_credential() -> String {
    "root".to_string()
}

fn default_namespace() -> String {
    "surveys".to_string()
}

fn default_http_port() -> u16 {
    8000
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_apply_when_nothing_is_set() {
        let config: AppConfig = serde_json::from_value(json!({})).expect("empty config parses");

        assert!(config.surrealdb_address.is_none());
        assert!(config.surrealdb_database.is_none());
        assert_eq!(config.surrealdb_username, "root");
        assert_eq!(config.surrealdb_password, "root");
        assert_eq!(config.surrealdb_namespace, "surveys");
        assert_eq!(config.http_port, 8000);
    }

    #[test]
    fn test_surrealdb_target_requires_address_and_database() {
        let partial: AppConfig =
            serde_json::from_value(json!({ "surrealdb_address": "ws://localhost:8001" }))
                .expect("partial config parses");
        assert!(partial.surrealdb_target().is_none());

        let full: AppConfig = serde_json::from_value(json!({
            "surrealdb_address": "ws://localhost:8001",
            "surrealdb_database": "surveys"
        }))
        .expect("full config parses");
        assert_eq!(
            full.surrealdb_target(),
            Some(("ws://localhost:8001", "surveys"))
        );
    }
}
