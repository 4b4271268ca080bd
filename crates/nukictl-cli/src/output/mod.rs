//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use nukictl_core::bulk::DeviceOutcome;
use nukictl_core::device::NukiDevice;
use nukictl_core::retry::AttemptReport;
use serde_json::Value;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the device list
    fn format_devices(&self, devices: &[NukiDevice]) -> String;

    /// Format bridge runtime information
    fn format_info(&self, info: &Value) -> String;

    /// Format the outcome of a single retried action
    fn format_action_result(&self, action: &str, nuki_id: u64, report: &AttemptReport) -> String;

    /// Format bulk operation results
    fn format_bulk_results(&self, action: &str, outcomes: &[DeviceOutcome]) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
