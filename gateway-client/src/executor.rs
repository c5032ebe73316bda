//! Request execution seam.
//!
//! [`GatewayClient`](crate::GatewayClient) only builds paths and decodes
//! envelopes; the HTTP round trip goes through a [`RequestExecutor`]. The
//! production implementation is [`HttpExecutor`], tests substitute their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};

use crate::config::{ClientConfig, ConfigError};

/// Failures of the round trip itself, before any envelope is decoded.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

/// Executes one authenticated API request and returns the raw response body.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// `path` is relative to the API base URL, e.g. `/accounts/abc/gateway`.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError>;
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for Arc<E> {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        (**self).execute(method, path, body).await
    }
}

#[async_trait]
impl<'a, E: RequestExecutor + ?Sized> RequestExecutor for &'a E {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        (**self).execute(method, path, body).await
    }
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for Box<E> {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        (**self).execute(method, path, body).await
    }
}

/// Static API credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Scoped API token, sent as a bearer token
    ApiToken(String),
    /// Legacy global API key, sent as `X-Auth-Email` / `X-Auth-Key`
    ApiKey { email: String, key: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiToken(_) => f.debug_tuple("ApiToken").field(&"<redacted>").finish(),
            Credentials::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .field("key", &"<redacted>")
                .finish(),
        }
    }
}

/// [`RequestExecutor`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpExecutor {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Self::with_client(Client::new(), base_url, credentials)
    }

    pub fn with_client(http_client: Client, base_url: &str, credentials: Credentials) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Build an executor with the timeout, user agent and credentials from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let credentials = config.credentials()?;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::with_client(http_client, &config.base_url, credentials))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http_client.request(method.clone(), &url);
        request = match &self.credentials {
            Credentials::ApiToken(token) => request.bearer_auth(token),
            Credentials::ApiKey { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        };
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        tracing::debug!(method = %method, url = %url, "Sending gateway API request");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                method = %method,
                path = %path,
                status = %status.as_u16(),
                "Gateway API returned an error status"
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_executor_url_normalization() {
        let executor = HttpExecutor::new(
            "https://api.example.com/client/v4/",
            Credentials::ApiToken("token".to_string()),
        );
        assert_eq!(executor.base_url(), "https://api.example.com/client/v4");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let token = format!("{:?}", Credentials::ApiToken("secret-token".to_string()));
        assert!(!token.contains("secret-token"));

        let key = format!(
            "{:?}",
            Credentials::ApiKey {
                email: "admin@example.com".to_string(),
                key: "secret-key".to_string(),
            }
        );
        assert!(key.contains("admin@example.com"));
        assert!(!key.contains("secret-key"));
    }

    #[test]
    fn test_status_error_display() {
        let error = TransportError::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(error.to_string(), "API returned 403: forbidden");
    }
}
