//! End-to-end tests of `GatewayClient` over `HttpExecutor` against a mock API server.

use std::time::Duration;

use gateway_client::test_util::MockEnvelope;
use gateway_client::{
    ClientConfig, Credentials, Error, GatewayClient, HttpExecutor, TransportError,
};
use gateway_common::{DeviceSettings, RuleType};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Responds with the request body wrapped in a successful envelope.
struct EchoEnvelope;

impl Respond for EchoEnvelope {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        ResponseTemplate::new(200).set_body_json(MockEnvelope::success_json(body))
    }
}

fn token_client(server: &MockServer) -> GatewayClient<HttpExecutor> {
    GatewayClient::new(HttpExecutor::new(
        &format!("{}/client/v4/", server.uri()),
        Credentials::ApiToken("test-token".to_string()),
    ))
}

#[tokio::test]
async fn test_update_device_settings_echo_server() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/client/v4/accounts/abc123/devices/settings"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "gateway_proxy_enabled": true,
            "gateway_udp_proxy_enabled": false
        })))
        .respond_with(EchoEnvelope)
        .expect(1)
        .mount(&server)
        .await;

    let settings = token_client(&server)
        .update_device_settings("abc123", &DeviceSettings::new(true, false))
        .await
        .unwrap();

    assert_eq!(settings, DeviceSettings::new(true, false));
}

#[tokio::test]
async fn test_logging_settings_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/v4/accounts/abc123/gateway/logging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockEnvelope::logging_json()))
        .mount(&server)
        .await;

    let settings = token_client(&server)
        .logging_settings("abc123")
        .await
        .unwrap();

    assert_eq!(settings.settings_by_rule_type.len(), 1);
    assert!(settings.for_rule_type(RuleType::Dns).is_some());
}

#[tokio::test]
async fn test_api_key_credentials_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/abc123/gateway"))
        .and(header("X-Auth-Email", "admin@example.com"))
        .and(header("X-Auth-Key", "global-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockEnvelope::account_json("abc123")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GatewayClient::new(HttpExecutor::new(
        &server.uri(),
        Credentials::ApiKey {
            email: "admin@example.com".to_string(),
            key: "global-key".to_string(),
        },
    ));

    let account = client.account("abc123").await.unwrap();
    assert_eq!(account.id, "abc123");
}

#[tokio::test]
async fn test_error_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/v4/accounts/abc123/gateway/configuration"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(MockEnvelope::error_json(10000, "Authentication error")),
        )
        .mount(&server)
        .await;

    match token_client(&server).configuration("abc123").await {
        Err(Error::Transport(TransportError::Status { status, body })) => {
            assert_eq!(status, 403);
            assert!(body.contains("Authentication error"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/v4/accounts/abc123/devices/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = token_client(&server)
        .device_settings("abc123")
        .await
        .unwrap_err();
    assert!(error.is_decode());
}

#[tokio::test]
async fn test_dropped_future_cancels_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/v4/accounts/abc123/gateway"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockEnvelope::account_json("abc123"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = token_client(&server);
    let result = tokio::time::timeout(Duration::from_millis(100), client.account("abc123")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_executor_from_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/abc123/gateway"))
        .and(header("Authorization", "Bearer config-token"))
        .and(header("User-Agent", "gatewayctl-test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockEnvelope::account_json("abc123")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        base_url: server.uri(),
        api_token: Some("config-token".to_string()),
        user_agent: "gatewayctl-test".to_string(),
        ..Default::default()
    };
    let client = GatewayClient::new(HttpExecutor::from_config(&config).unwrap());

    let account = client.account("abc123").await.unwrap();
    assert_eq!(account.gateway_tag, "1234");
}
