use crate::error::{BolaoError, Result};
use serde::{Deserialize, Serialize};

/// Versioned base path of the platform API.
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Environment variable overriding the default API location.
pub const API_URL_ENV: &str = "BOLAO_API_URL";

/// Base URL used when nothing else is configured: `BOLAO_API_URL` if set,
/// otherwise the local development server.
pub fn default_base_url() -> String {
    std::env::var(API_URL_ENV)
        .unwrap_or_else(|_| format!("http://127.0.0.1:8000{}", DEFAULT_BASE_PATH))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(BolaoError::config("API base URL must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(BolaoError::config("request timeout must be non-zero"));
        }
        Ok(())
    }

    /// Joins an endpoint path onto the base URL, tolerating a trailing slash
    /// on either side.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_join_tolerates_slashes() {
        let config = ClientConfig::new("http://localhost:8000/api/v1/");
        assert_eq!(
            config.endpoint("/boloes"),
            "http://localhost:8000/api/v1/boloes"
        );
        assert_eq!(
            config.endpoint("carteira/"),
            "http://localhost:8000/api/v1/carteira/"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = ClientConfig::new("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        assert_eq!(ClientConfig::default().timeout_secs, 30);
    }
}
