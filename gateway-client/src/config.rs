//! Client configuration.

use std::path::Path;

use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use crate::executor::Credentials;

/// Connection settings for the gateway API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Scoped API token. Takes precedence over `api_email` / `api_key`.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub api_email: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Account used when a command does not name one explicitly
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            api_email: None,
            api_key: None,
            account_id: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Missing credentials: set api_token, or both api_email and api_key")]
    MissingCredentials,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

// Default values
fn default_base_url() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("gatewayctl/{}", env!("CARGO_PKG_VERSION"))
}
fn default_log_level() -> String {
    "info".to_string()
}

impl ClientConfig {
    /// Load configuration from `gatewayctl.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file when given.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (GATEWAY__KEY format, e.g. GATEWAY__API_TOKEN)
    /// 2. The config file
    /// 3. Built-in defaults
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigLoader::builder()
            .set_default("base_url", default_base_url())?
            .set_default("timeout_secs", default_timeout() as i64)?
            .set_default("user_agent", default_user_agent())?
            .set_default("log_level", default_log_level())?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("gatewayctl").required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Resolve which credentials to send. A token wins over a key pair.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        if let Some(token) = self.api_token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(Credentials::ApiToken(token.clone()));
        }

        match (&self.api_email, &self.api_key) {
            (Some(email), Some(key)) if !email.is_empty() && !key.is_empty() => {
                Ok(Credentials::ApiKey {
                    email: email.clone(),
                    key: key.clone(),
                })
            }
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}
