//! Gateway account configuration.
//!
//! Every settings sub-object is optional: an absent key means "not
//! configured", which is different from an object whose flags are all
//! `false`. Unset values are omitted from the wire rather than sent as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account configuration as read from and written to
/// `/accounts/{id}/gateway/configuration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountConfiguration {
    #[serde(default)]
    pub settings: AccountSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antivirus: Option<AntivirusSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_decrypt: Option<TlsDecryptSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_log: Option<ActivityLogSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_page: Option<BlockPageSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_isolation: Option<BrowserIsolationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fips: Option<FipsSettings>,
}

/// Antivirus scanning of transferred files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntivirusSettings {
    #[serde(default)]
    pub enabled_download_phase: bool,
    #[serde(default)]
    pub enabled_upload_phase: bool,
    /// Block the transfer when the scan cannot complete
    #[serde(default)]
    pub fail_closed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsDecryptSettings {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogSettings {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserIsolationSettings {
    #[serde(default)]
    pub url_browser_isolation_enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FipsSettings {
    /// Restrict TLS to FIPS-compliant ciphers
    #[serde(default)]
    pub tls: bool,
}

/// Customization of the page shown when a request is blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPageSettings {
    /// Tri-state: unset, explicitly enabled, or explicitly disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailto_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailto_subject: Option<String>,
}
