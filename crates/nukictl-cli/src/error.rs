//! Error types for the nukictl CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific
//! variants, each mapped to a stable exit code for scripting.

use nukictl_core::error::{BridgeError, CoreError, DeviceError};
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const DEVICE_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
    pub const PARTIAL_FAILURE: i32 = 5;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No device target: pass --id or --name, or set nukiId in the config file")]
    MissingTarget,

    #[error("No devices are paired with this bridge")]
    NoDevicesFound,

    #[error("{action} of device {nuki_id} failed after {attempts} attempt(s): {detail}")]
    ActionFailed {
        action: String,
        nuki_id: u64,
        attempts: u32,
        detail: String,
    },

    #[error("Partial failure: {succeeded} succeeded, {failed} failed")]
    PartialFailure { succeeded: usize, failed: usize },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Bridge(BridgeError::Transport { .. })
                | CoreError::Bridge(BridgeError::ClientBuild(_)) => exit_codes::NETWORK_ERROR,
                CoreError::Bridge(BridgeError::Protocol { .. })
                | CoreError::Bridge(BridgeError::Malformed { .. }) => exit_codes::DEVICE_ERROR,
                CoreError::Device(DeviceError::NameNotFound(_)) => exit_codes::DEVICE_ERROR,
            },
            CliError::InvalidArgument(_) | CliError::MissingTarget => exit_codes::INVALID_ARGS,
            CliError::NoDevicesFound => exit_codes::GENERAL_ERROR,
            CliError::ActionFailed { .. } => exit_codes::DEVICE_ERROR,
            CliError::PartialFailure { .. } => exit_codes::PARTIAL_FAILURE,
        }
    }
}

// Conversions from core error subtypes so command modules can use `?` on
// bridge calls directly.
impl From<BridgeError> for CliError {
    fn from(e: BridgeError) -> Self {
        CliError::Core(CoreError::Bridge(e))
    }
}

impl From<DeviceError> for CliError {
    fn from(e: DeviceError) -> Self {
        CliError::Core(CoreError::Device(e))
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let err = CliError::from(BridgeError::Protocol {
            path: "/list".to_string(),
            status: 401,
        });
        assert_eq!(err.exit_code(), exit_codes::DEVICE_ERROR);

        assert_eq!(CliError::MissingTarget.exit_code(), exit_codes::INVALID_ARGS);
        assert_eq!(
            CliError::PartialFailure {
                succeeded: 2,
                failed: 1
            }
            .exit_code(),
            exit_codes::PARTIAL_FAILURE
        );
    }

    #[test]
    fn test_action_failed_display() {
        let err = CliError::ActionFailed {
            action: "unlock".to_string(),
            nuki_id: 42,
            attempts: 3,
            detail: "Bridge returned HTTP 503 for /lockAction".to_string(),
        };
        let message = format!("{}", err);
        assert!(message.contains("unlock"));
        assert!(message.contains("42"));
        assert!(message.contains("3 attempt"));
    }
}
