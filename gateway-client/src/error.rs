//! Error types for gateway API calls.

use gateway_common::ResponseInfo;

use crate::executor::TransportError;

/// Label prefixed to the message of every decode failure.
pub const UNMARSHAL_ERROR: &str = "error unmarshalling the JSON response";

/// Errors returned by [`GatewayClient`](crate::GatewayClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executor failed. The error is passed through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not JSON or does not match the expected envelope.
    #[error("error unmarshalling the JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error marshalling the request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Well-formed envelope with `success: false`.
    #[error("API request failed: {}", format_infos(.errors))]
    Api {
        errors: Vec<ResponseInfo>,
        messages: Vec<ResponseInfo>,
    },
}

impl Error {
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

fn format_infos(infos: &[ResponseInfo]) -> String {
    if infos.is_empty() {
        return "no error details".to_string();
    }
    infos
        .iter()
        .map(|info| info.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
