use gateway_common::{Envelope, ResponseInfo};
use serde_json::{json, Value};

/// Canned response envelopes in the shape the gateway API returns.
pub struct MockEnvelope;

impl MockEnvelope {
    pub fn success_json(result: Value) -> Value {
        json!(Envelope::success(result))
    }

    pub fn error_json(code: i64, message: &str) -> Value {
        json!(Envelope::<Value>::failure(vec![ResponseInfo {
            code,
            message: message.to_string(),
        }]))
    }

    pub fn account_json(account_id: &str) -> Value {
        Self::success_json(json!({
            "gateway_tag": "1234",
            "provider_name": "Example Provider",
            "id": account_id
        }))
    }

    pub fn configuration_json() -> Value {
        Self::success_json(json!({
            "settings": {
                "antivirus": {
                    "enabled_download_phase": true,
                    "enabled_upload_phase": false,
                    "fail_closed": true
                },
                "tls_decrypt": {"enabled": true},
                "activity_log": {"enabled": true},
                "block_page": {
                    "enabled": true,
                    "footer_text": "--footer--",
                    "header_text": "--header--",
                    "mailto_address": "admin@example.com",
                    "mailto_subject": "Blocked Request",
                    "name": "Example"
                },
                "browser_isolation": {"url_browser_isolation_enabled": true},
                "fips": {"tls": true}
            },
            "created_at": "2014-01-01T05:20:00.12345Z",
            "updated_at": "2014-01-01T05:20:00.12345Z"
        }))
    }

    pub fn device_settings_json(proxy: bool, udp_proxy: bool) -> Value {
        Self::success_json(json!({
            "gateway_proxy_enabled": proxy,
            "gateway_udp_proxy_enabled": udp_proxy
        }))
    }

    pub fn logging_json() -> Value {
        Self::success_json(json!({
            "settings_by_rule_type": {
                "dns": {"log_all": false, "log_blocks": true}
            },
            "redact_pii": true
        }))
    }
}
