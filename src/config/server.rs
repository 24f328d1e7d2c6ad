//! Server configuration

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Chatbot round trips a single debate request may chain: the health check
/// and the turn on `/messages`, or the turn and the session release on
/// `/evaluation`.
pub const CHATBOT_CALLS_PER_REQUEST: u64 = 2;

/// Headroom for database work around the chatbot calls.
pub const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 5;

/// Smallest request timeout that lets a debate request wait out every
/// chatbot call it makes before the server cuts it off.
pub fn min_request_timeout_secs(chatbot_timeout_secs: u64) -> u64 {
    chatbot_timeout_secs
        .saturating_mul(CHATBOT_CALLS_PER_REQUEST)
        .saturating_add(REQUEST_TIMEOUT_MARGIN_SECS)
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds. Must outlast the chatbot calls a debate
    /// request makes, see [`min_request_timeout_secs`].
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// CORS allowed origins (comma-separated)
    pub cors_origins: Option<String>,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ValidationError::InvalidAddress(raw))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Fail when a debate request could be cut off while its chatbot calls
    /// are still within their own timeout. A chatbot that just timed out
    /// yields a readable fallback reply, a request timeout yields a bare 408.
    pub fn check_chatbot_budget(&self, chatbot_timeout_secs: u64) -> Result<(), ValidationError> {
        let min = min_request_timeout_secs(chatbot_timeout_secs);
        if self.request_timeout_secs < min {
            return Err(ValidationError::RequestTimeoutTooShort { min });
        }
        Ok(())
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// CORS origins, blank entries dropped
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,debate_arena=debug,sqlx=warn,tower_http=debug".to_string()
}

fn default_request_timeout() -> u64 {
    75
}
