//! HTTP access to the Nuki bridge.

pub mod client;
pub mod response;

pub use client::{bridge_base_url, BridgeClient, LockAction, BRIDGE_PORT};
pub use response::BodyVerdict;
