//! Test doubles for code built on [`GatewayClient`](crate::GatewayClient).

pub mod mock_gateway;

use std::collections::VecDeque;

use async_trait::async_trait;
use reqwest::Method;
use tokio::sync::Mutex;

use crate::executor::{RequestExecutor, TransportError};

pub use mock_gateway::MockEnvelope;

/// A request as seen by [`MockExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    /// Request body parsed as JSON, if there was one.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

enum MockReply {
    Bytes(Vec<u8>),
    Fail(TransportError),
    Echo,
}

/// [`RequestExecutor`] that records every request and answers from a queue
/// of canned replies.
///
/// When the queue is empty it fails with [`TransportError::Other`].
#[derive(Default)]
pub struct MockExecutor {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body.
    pub async fn respond_with_bytes(&self, body: impl Into<Vec<u8>>) {
        self.replies.lock().await.push_back(MockReply::Bytes(body.into()));
    }

    /// Queue a JSON response body.
    pub async fn respond_with_json(&self, body: serde_json::Value) {
        self.respond_with_bytes(body.to_string()).await;
    }

    /// Queue a transport failure.
    pub async fn fail_with(&self, error: TransportError) {
        self.replies.lock().await.push_back(MockReply::Fail(error));
    }

    /// Queue a reply that wraps the request body in a successful envelope.
    pub async fn echo(&self) {
        self.replies.lock().await.push_back(MockReply::Echo);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().await.push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.clone(),
        });

        match self.replies.lock().await.pop_front() {
            Some(MockReply::Bytes(bytes)) => Ok(bytes),
            Some(MockReply::Fail(error)) => Err(error),
            Some(MockReply::Echo) => {
                let result = body
                    .as_deref()
                    .map(serde_json::from_slice::<serde_json::Value>)
                    .transpose()
                    .map_err(|e| TransportError::Other(format!("echo of invalid body: {}", e)))?
                    .unwrap_or(serde_json::Value::Null);
                Ok(MockEnvelope::success_json(result).to_string().into_bytes())
            }
            None => Err(TransportError::Other(format!(
                "no reply queued for {}",
                path
            ))),
        }
    }
}
