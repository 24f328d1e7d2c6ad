//! Chatbot service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how patiently to reach the debate chatbot
#[derive(Debug, Clone, Deserialize)]
pub struct ChatbotConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout; evaluations can be slow
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ChatbotConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidChatbotUrl);
        }
        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            return Err(ValidationError::InvalidChatbotTimeout);
        }
        Ok(())
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://chatbot:8000".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_compose_service() {
        let config = ChatbotConfig::default();
        assert_eq!(config.base_url, "http://chatbot:8000");
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_scheme_is_required() {
        let config = ChatbotConfig {
            base_url: "chatbot:8000".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidChatbotUrl));
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let config = ChatbotConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidChatbotTimeout));
    }
}
