//! Device name resolution.

use crate::bridge::BridgeClient;
use crate::device::{find_by_name, parse_device_list};
use crate::error::{DeviceError, Result};

/// Resolve a device name to its nukiId.
///
/// Fetches `/list` once (no retries) and scans it in bridge order. The first
/// device whose name exactly equals `name` wins. Bridge names are not
/// unique; first match is the documented policy rather than an error on
/// ambiguity.
pub async fn resolve_device_id(client: &BridgeClient, name: &str) -> Result<u64> {
    let body = client.list().await?;
    let devices = parse_device_list(body)?;

    find_by_name(&devices, name)
        .map(|d| d.nuki_id)
        .ok_or_else(|| DeviceError::NameNotFound(name.to_string()).into())
}
