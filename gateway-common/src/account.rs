//! Gateway account identity.

use serde::{Deserialize, Serialize};

/// Identity of an account on the gateway, as returned by `GET /accounts/{id}/gateway`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// Internal gateway identifier
    #[serde(default)]
    pub gateway_tag: String,
    /// Name of the auth provider
    #[serde(default)]
    pub provider_name: String,
    /// Account ID
    #[serde(default)]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_identity_deserialization() {
        let json = r#"{
            "gateway_tag": "1234",
            "provider_name": "Example Provider",
            "id": "abc123"
        }"#;

        let identity: AccountIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.gateway_tag, "1234");
        assert_eq!(identity.provider_name, "Example Provider");
        assert_eq!(identity.id, "abc123");
    }
}
