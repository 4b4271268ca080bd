//! Device projections of bridge `/list` responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BridgeError;

/// One lock as reported by the bridge.
///
/// A read-only projection of a `/list` entry; rebuilt from every response and
/// never persisted. Unknown fields are ignored so newer bridge firmware does
/// not break parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NukiDevice {
    pub nuki_id: u64,
    pub name: String,
    pub device_type: u8,
    pub firmware_version: Option<String>,
    pub last_known_state: Option<LastKnownState>,
}

impl Default for NukiDevice {
    fn default() -> Self {
        Self {
            nuki_id: 0,
            name: String::new(),
            device_type: 0,
            firmware_version: None,
            last_known_state: None,
        }
    }
}

/// State snapshot the bridge caches for a device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastKnownState {
    pub mode: Option<u8>,
    pub state: Option<u8>,
    pub state_name: Option<String>,
    pub battery_critical: Option<bool>,
    pub battery_charging: Option<bool>,
    pub battery_charge_state: Option<u8>,
    pub keypad_battery_critical: Option<bool>,
    pub doorsensor_state: Option<u8>,
    pub doorsensor_state_name: Option<String>,
    pub timestamp: Option<String>,
}

impl NukiDevice {
    /// Human-readable name for the `deviceType` code.
    pub fn device_type_name(&self) -> &'static str {
        device_type_name(self.device_type)
    }
}

/// Map a bridge `deviceType` code to its product name.
pub fn device_type_name(code: u8) -> &'static str {
    match code {
        0 => "Smart Lock",
        2 => "Opener",
        3 => "Smart Door",
        4 => "Smart Lock 3.0",
        _ => "Unknown",
    }
}

/// Parse a `/list` response body into devices.
pub fn parse_device_list(body: Value) -> Result<Vec<NukiDevice>, BridgeError> {
    serde_json::from_value(body).map_err(|e| BridgeError::Malformed {
        path: "/list".to_string(),
        source: e,
    })
}

/// Find a device by exact name match.
///
/// Bridge device names are not guaranteed unique; the first device in bridge
/// order wins. Callers needing uniqueness must pre-validate the list.
pub fn find_by_name<'a>(devices: &'a [NukiDevice], name: &str) -> Option<&'a NukiDevice> {
    devices.iter().find(|d| d.name == name)
}
