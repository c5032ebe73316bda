//! Gateway account-configuration operations.

use gateway_common::{
    AccountConfiguration, AccountIdentity, DeviceSettings, Envelope, LoggingSettings,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::executor::RequestExecutor;

pub fn account_path(account_id: &str) -> String {
    format!("/accounts/{}/gateway", account_id)
}

pub fn configuration_path(account_id: &str) -> String {
    format!("/accounts/{}/gateway/configuration", account_id)
}

pub fn device_settings_path(account_id: &str) -> String {
    format!("/accounts/{}/devices/settings", account_id)
}

pub fn logging_path(account_id: &str) -> String {
    format!("/accounts/{}/gateway/logging", account_id)
}

/// Client for the gateway account-configuration endpoints.
///
/// Holds nothing but its executor, so it can be cloned and shared between
/// tasks freely. Dropping a returned future cancels the in-flight request.
#[derive(Debug, Clone)]
pub struct GatewayClient<E> {
    executor: E,
}

impl<E: RequestExecutor> GatewayClient<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Account identity: internal gateway tag, auth provider and account ID.
    pub async fn account(&self, account_id: &str) -> Result<AccountIdentity> {
        self.request(Method::GET, &account_path(account_id), None)
            .await
    }

    /// Current gateway configuration of the account.
    pub async fn configuration(&self, account_id: &str) -> Result<AccountConfiguration> {
        self.request(Method::GET, &configuration_path(account_id), None)
            .await
    }

    /// Replace the gateway configuration and return what the API stored.
    pub async fn update_configuration(
        &self,
        account_id: &str,
        configuration: &AccountConfiguration,
    ) -> Result<AccountConfiguration> {
        let body = encode(configuration)?;
        self.request(Method::PUT, &configuration_path(account_id), Some(body))
            .await
    }

    /// Device-level proxy settings, including UDP proxying.
    pub async fn device_settings(&self, account_id: &str) -> Result<DeviceSettings> {
        self.request(Method::GET, &device_settings_path(account_id), None)
            .await
    }

    pub async fn update_device_settings(
        &self,
        account_id: &str,
        settings: &DeviceSettings,
    ) -> Result<DeviceSettings> {
        let body = encode(settings)?;
        self.request(Method::PUT, &device_settings_path(account_id), Some(body))
            .await
    }

    pub async fn logging_settings(&self, account_id: &str) -> Result<LoggingSettings> {
        self.request(Method::GET, &logging_path(account_id), None)
            .await
    }

    /// Replace the logging settings and return the new configuration.
    pub async fn update_logging_settings(
        &self,
        account_id: &str,
        settings: &LoggingSettings,
    ) -> Result<LoggingSettings> {
        let body = encode(settings)?;
        self.request(Method::PUT, &logging_path(account_id), Some(body))
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        tracing::debug!(method = %method, path = %path, "Gateway request");

        let raw = self.executor.execute(method, path, body).await?;
        decode_envelope(&raw)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(Error::Encode)
}

/// Decode a raw response body into the `result` of its envelope.
pub(crate) fn decode_envelope<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(raw).map_err(Error::Decode)?;

    if !envelope.is_success() {
        tracing::warn!(
            errors = ?envelope.status.errors,
            "Gateway API reported an unsuccessful response"
        );
        return Err(Error::Api {
            errors: envelope.status.errors,
            messages: envelope.status.messages,
        });
    }

    envelope.result.ok_or_else(|| {
        Error::Decode(<serde_json::Error as serde::de::Error>::missing_field(
            "result",
        ))
    })
}
