//! Shared core for Nuki bridge lock control.
//!
//! Everything that talks to the bridge lives here: the HTTP client, the
//! device model, name resolution, the retry executor, and the sequential
//! bulk runner. The CLI crate layers argument parsing, configuration, and
//! output formatting on top.

pub mod bridge;
pub mod bulk;
pub mod device;
pub mod error;
pub mod resolve;
pub mod retry;
