//! Persisted configuration.
//!
//! A single JSON file holding the bridge address, token, default device id,
//! and retry budget. CLI flags and environment variables always win over
//! file values. Config problems are never fatal: a malformed file is warned
//! about and treated as absent so a bad edit can't brick the tool.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Values a config file may provide. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredConfig {
    pub ip: Option<String>,
    pub token: Option<String>,
    pub nuki_id: Option<u64>,
    pub retries: Option<u32>,
}

impl StoredConfig {
    /// Template written on first run, for the user to edit.
    fn template() -> Self {
        Self {
            ip: Some("0.0.0.0".to_string()),
            token: Some("1mytkn".to_string()),
            nuki_id: Some(123456789),
            retries: None,
        }
    }
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "nukictl")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Load the config file, creating a template on first run.
pub fn load(path: &Path) -> StoredConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let template = StoredConfig::template();
            match write_template(path, &template) {
                Ok(()) => eprintln!(
                    "Created default config at {}. Edit it with your bridge address and token.",
                    path.display()
                ),
                Err(e) => eprintln!("Warning: could not create {}: {}", path.display(), e),
            }
            return template;
        }
        Err(e) => {
            eprintln!("Warning: could not read {}: {}. Ignoring it.", path.display(), e);
            return StoredConfig::default();
        }
    };

    match serde_json::from_str::<StoredConfig>(&content) {
        Ok(config) => {
            if config == StoredConfig::template() {
                eprintln!(
                    "Warning: {} still contains template values. Edit it with your actual settings.",
                    path.display()
                );
            }
            config
        }
        Err(e) => {
            eprintln!("Warning: {} is malformed ({}). Ignoring it.", path.display(), e);
            StoredConfig::default()
        }
    }
}

fn write_template(path: &Path, template: &StoredConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(template)
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}
