//! Configuration model loaded from external sources.

use std::env;
use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;

use crate::search::debounce::DEFAULT_DELAY;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub assets_dir: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for a search front-end talking to a running server.
pub struct SearchConfig {
    /// Origin every search request is resolved against.
    pub base_url: String,
    /// Quiet period before a search fires, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Session cookie (`name=value`) attached to same-origin requests.
    #[serde(default)]
    pub session_cookie: Option<String>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

impl SearchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Loads `config/default.yaml`, the `config/{APP_ENV}.yaml` overrides and
/// `APP_`-prefixed environment variables, in that order.
pub fn load_settings() -> Result<Config, ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_config_defaults_delay() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080"}"#).unwrap();
        assert_eq!(config.delay(), Duration::from_millis(250));
        assert!(config.session_cookie.is_none());
    }
}
