//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `DEBATE_ARENA` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use debate_arena::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod chatbot;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use chatbot::ChatbotConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{min_request_timeout_secs, Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DEBATE_ARENA";

/// Root application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Listen address, environment, logging, CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection
    pub database: DatabaseConfig,

    /// JWT validation
    pub auth: AuthConfig,

    /// External chatbot service
    #[serde(default)]
    pub chatbot: ChatbotConfig,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` when present).
    ///
    /// - `DEBATE_ARENA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DEBATE_ARENA__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values do
    /// not parse.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks on top of what deserialization guarantees.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.chatbot.validate()?;
        self.server.check_chatbot_budget(self.chatbot.timeout_secs)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DEBATE_ARENA__DATABASE__URL",
        "DEBATE_ARENA__AUTH__JWT_SECRET",
        "DEBATE_ARENA__SERVER__PORT",
        "DEBATE_ARENA__SERVER__ENVIRONMENT",
        "DEBATE_ARENA__CHATBOT__BASE_URL",
        "DEBATE_ARENA__CHATBOT__TIMEOUT_SECS",
        "DEBATE_ARENA__SERVER__REQUEST_TIMEOUT_SECS",
    ];

    fn set_minimal_env() {
        env::set_var("DEBATE_ARENA__DATABASE__URL", "postgres://arena@localhost/arena");
        env::set_var("DEBATE_ARENA__AUTH__JWT_SECRET", "dev-secret");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn loads_minimal_environment_with_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.database.url, "postgres://arena@localhost/arena");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.chatbot.base_url, "http://chatbot:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_nested_values() {
        let config = load_with(&[
            ("DEBATE_ARENA__SERVER__PORT", "3000"),
            ("DEBATE_ARENA__CHATBOT__BASE_URL", "http://localhost:9000"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chatbot.base_url, "http://localhost:9000");
    }

    #[test]
    fn production_rejects_short_secret() {
        let config = load_with(&[("DEBATE_ARENA__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort { min: 32 })
        );
    }

    #[test]
    fn request_timeout_must_outlast_chatbot_calls() {
        let config = load_with(&[
            ("DEBATE_ARENA__SERVER__REQUEST_TIMEOUT_SECS", "30"),
            ("DEBATE_ARENA__CHATBOT__TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::RequestTimeoutTooShort { min: 65 })
        );

        let config = load_with(&[
            ("DEBATE_ARENA__SERVER__REQUEST_TIMEOUT_SECS", "120"),
            ("DEBATE_ARENA__CHATBOT__TIMEOUT_SECS", "50"),
        ])
        .unwrap();
        assert!(config.validate().is_ok());
    }
}
