//! Per-invocation settings.
//!
//! An immutable context value merged once from flags, environment, and the
//! config file, then threaded through every command. Mandatory fields are
//! validated here, before any network call is attempted.

use std::time::Duration;

use nukictl_core::bridge::{bridge_base_url, BridgeClient};
use nukictl_core::resolve::resolve_device_id;
use nukictl_core::retry::RetryPolicy;

use crate::cli::{Cli, TargetArgs};
use crate::config::StoredConfig;
use crate::error::{CliError, Result};

/// Attempts per lock operation when neither flag nor config says otherwise.
pub const DEFAULT_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub token: String,
    /// `nukiId` from the config file, used when no target flag is given.
    pub default_device: Option<u64>,
    pub retries: u32,
    pub timeout: Duration,
}

impl Settings {
    /// Merge flags over config values and validate mandatory fields.
    pub fn resolve(cli: &Cli, stored: &StoredConfig) -> Result<Self> {
        let ip = cli
            .ip
            .clone()
            .or_else(|| stored.ip.clone())
            .ok_or_else(|| {
                CliError::InvalidArgument(
                    "bridge address is required (use --ip or set `ip` in the config file)"
                        .to_string(),
                )
            })?;

        let token = cli
            .token
            .clone()
            .or_else(|| stored.token.clone())
            .ok_or_else(|| {
                CliError::InvalidArgument(
                    "API token is required (use --token or set `token` in the config file)"
                        .to_string(),
                )
            })?;

        Ok(Self {
            base_url: bridge_base_url(&ip),
            token,
            default_device: stored.nuki_id,
            retries: cli.retries.or(stored.retries).unwrap_or(DEFAULT_RETRIES),
            timeout: Duration::from_millis(cli.timeout),
        })
    }

    pub fn client(&self) -> Result<BridgeClient> {
        BridgeClient::new(&self.base_url, &self.token, self.timeout).map_err(CliError::from)
    }

    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retries)
    }
}

/// Resolve the target device id for a single-device command.
///
/// Precedence: explicit `--id`, then `--name` via the bridge's device list,
/// then the config file's `nukiId`.
pub async fn resolve_target(
    client: &BridgeClient,
    settings: &Settings,
    target: &TargetArgs,
) -> Result<u64> {
    if let Some(id) = target.id {
        return Ok(id);
    }

    if let Some(name) = &target.name {
        return resolve_device_id(client, name).await.map_err(CliError::from);
    }

    settings.default_device.ok_or(CliError::MissingTarget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;

    fn cli(ip: Option<&str>, token: Option<&str>) -> Cli {
        Cli {
            ip: ip.map(String::from),
            token: token.map(String::from),
            retries: None,
            timeout: 10000,
            json: false,
            strict: false,
            config: None,
            command: Commands::List,
        }
    }

    #[test]
    fn test_flags_take_precedence_over_config() {
        let stored = StoredConfig {
            ip: Some("10.0.0.1".to_string()),
            token: Some("filetoken".to_string()),
            nuki_id: Some(7),
            retries: Some(9),
        };

        let settings = Settings::resolve(&cli(Some("10.0.0.2"), Some("flagtoken")), &stored).unwrap();

        assert_eq!(settings.base_url, "http://10.0.0.2:8080");
        assert_eq!(settings.token, "flagtoken");
        assert_eq!(settings.default_device, Some(7));
        assert_eq!(settings.retries, 9);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let stored = StoredConfig {
            ip: Some("10.0.0.1".to_string()),
            token: Some("filetoken".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(&cli(None, None), &stored).unwrap();

        assert_eq!(settings.base_url, "http://10.0.0.1:8080");
        assert_eq!(settings.token, "filetoken");
        assert_eq!(settings.retries, DEFAULT_RETRIES);
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_network_call() {
        // A live server that must never be contacted.
        let mut server = mockito::Server::new_async().await;
        let untouched = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = Settings::resolve(&cli(None, None), &StoredConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));

        let err = Settings::resolve(&cli(Some("10.0.0.1"), None), &StoredConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));

        untouched.assert_async().await;
    }

    #[tokio::test]
    async fn test_resolve_target_precedence() {
        // The client is never used when an explicit id or default is present.
        let settings = Settings {
            base_url: "http://10.0.0.1:8080".to_string(),
            token: "tkn".to_string(),
            default_device: Some(99),
            retries: DEFAULT_RETRIES,
            timeout: Duration::from_secs(1),
        };
        let client = settings.client().unwrap();

        let explicit = TargetArgs {
            id: Some(5),
            name: None,
        };
        assert_eq!(resolve_target(&client, &settings, &explicit).await.unwrap(), 5);

        let fallback = TargetArgs::default();
        assert_eq!(resolve_target(&client, &settings, &fallback).await.unwrap(), 99);
    }

    #[tokio::test]
    async fn test_resolve_target_without_any_source_is_missing_target() {
        let settings = Settings {
            base_url: "http://10.0.0.1:8080".to_string(),
            token: "tkn".to_string(),
            default_device: None,
            retries: DEFAULT_RETRIES,
            timeout: Duration::from_secs(1),
        };
        let client = settings.client().unwrap();

        let err = resolve_target(&client, &settings, &TargetArgs::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::MissingTarget));
    }
}
