//! Device-level proxy settings.

use serde::{Deserialize, Serialize};

/// Proxy behaviour enforced on enrolled devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSettings {
    #[serde(default)]
    pub gateway_proxy_enabled: bool,
    #[serde(default)]
    pub gateway_udp_proxy_enabled: bool,
}

impl DeviceSettings {
    pub fn new(gateway_proxy_enabled: bool, gateway_udp_proxy_enabled: bool) -> Self {
        Self {
            gateway_proxy_enabled,
            gateway_udp_proxy_enabled,
        }
    }
}
