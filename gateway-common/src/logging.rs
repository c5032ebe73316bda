//! Gateway activity logging settings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use crate::envelope::null_as_default;

/// Kind of gateway rule a logging configuration applies to.
///
/// Serialized as its plain name (`"http"`, `"dns"`, `"l4"`). Names this
/// client does not know are kept in `Other` so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// HTTP filtering rules
    Http,
    /// DNS filtering rules
    Dns,
    /// Network (layer 4) rules
    L4,
    Other(String),
}

impl RuleType {
    pub fn as_str(&self) -> &str {
        match self {
            RuleType::Http => "http",
            RuleType::Dns => "dns",
            RuleType::L4 => "l4",
            RuleType::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for RuleType {
    fn from(name: &str) -> Self {
        match name {
            "http" => RuleType::Http,
            "dns" => RuleType::Dns,
            "l4" => RuleType::L4,
            other => RuleType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(RuleType::from(name.as_str()))
    }
}

/// What gets logged for one rule type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleLoggingConfig {
    #[serde(default)]
    pub log_all: bool,
    /// Only log requests that were blocked
    #[serde(default)]
    pub log_blocks: bool,
}

/// Logging settings as read from and written to `/accounts/{id}/gateway/logging`.
///
/// Rule types missing from the payload stay missing from
/// `settings_by_rule_type`; they are never filled in with defaults. A `null`
/// map decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings_by_rule_type: HashMap<RuleType, RuleLoggingConfig>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub redact_pii: bool,
}

impl LoggingSettings {
    /// Logging configuration for a rule type, if one is set.
    pub fn for_rule_type(&self, rule_type: RuleType) -> Option<&RuleLoggingConfig> {
        self.settings_by_rule_type.get(&rule_type)
    }

    /// Builder-style helper to set the configuration of one rule type.
    pub fn with_rule_type(mut self, rule_type: RuleType, config: RuleLoggingConfig) -> Self {
        self.settings_by_rule_type.insert(rule_type, config);
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
