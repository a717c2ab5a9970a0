//! Application configuration
//!
//! Environment driven, with an optional `.env` file.

use directory_client::ClientConfig;

use crate::error::ConfigError;
use crate::views::FormOptions;

/// Application configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DIRECTORY_API_URL | http://localhost:3000 | Employee API base URL |
/// | DIRECTORY_REQUEST_TIMEOUT_SECS | unset | Request timeout; unset means none |
/// | LOG_LEVEL | info | Default log level (`RUST_LOG` wins when set) |
/// | LOG_DIR | unset | Directory for daily rolling log files |
/// | DIRECTORY_EMAIL_DOMAIN | unset | Restrict employee emails to this domain |
///
/// # Example
///
/// ```ignore
/// DIRECTORY_API_URL=http://api.internal:8080 LOG_LEVEL=debug cargo test
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub email_domain: Option<String>,
}

impl AppConfig {
    /// Load `.env` if present, then read the environment
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Read configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout_secs = match get("DIRECTORY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "DIRECTORY_REQUEST_TIMEOUT_SECS",
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            api_url: get("DIRECTORY_API_URL").unwrap_or_else(|| "http://localhost:3000".into()),
            request_timeout_secs,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR"),
            email_domain: get("DIRECTORY_EMAIL_DOMAIN"),
        })
    }

    /// HTTP client settings
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone());
        match self.request_timeout_secs {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }

    /// Employee form settings
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            email_domain: self.email_domain.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".into(),
            request_timeout_secs: None,
            log_level: "info".into(),
            log_dir: None,
            email_domain: None,
        }
    }
}
