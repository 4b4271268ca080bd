//! Error types for nukictl core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors from a single HTTP exchange with the bridge.
///
/// One variant per failure layer: the request never completed (`Transport`),
/// the bridge answered with a non-2xx status (`Protocol`), or the body was
/// not valid JSON (`Malformed`). Retry policy treats all three the same.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Bridge returned HTTP {status} for {path}")]
    Protocol { path: String, status: u16 },

    #[error("Unparseable response from {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Device identity errors.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("No device named '{0}' is paired with this bridge")]
    NameNotFound(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
