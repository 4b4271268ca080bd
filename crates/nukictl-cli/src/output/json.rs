//! JSON-formatted output for scripting.

use serde::Serialize;
use serde_json::{json, Value};

use nukictl_core::bulk::DeviceOutcome;
use nukictl_core::device::NukiDevice;
use nukictl_core::retry::{AttemptOutcome, AttemptReport};

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn result_value(report: &AttemptReport) -> Value {
    match &report.last {
        AttemptOutcome::Response(body) => body.clone(),
        AttemptOutcome::Failed(e) => json!(e.to_string()),
    }
}

impl OutputFormatter for JsonOutput {
    fn format_devices(&self, devices: &[NukiDevice]) -> String {
        let output = json!({
            "devices": devices,
            "count": devices.len()
        });
        Self::to_json(&output)
    }

    fn format_info(&self, info: &Value) -> String {
        Self::to_json(info)
    }

    fn format_action_result(&self, action: &str, nuki_id: u64, report: &AttemptReport) -> String {
        Self::to_json(&json!({
            "action": action,
            "nukiId": nuki_id,
            "success": report.succeeded,
            "attempts": report.attempts,
            "result": result_value(report)
        }))
    }

    fn format_bulk_results(&self, action: &str, outcomes: &[DeviceOutcome]) -> String {
        let items: Vec<Value> = outcomes
            .iter()
            .map(|outcome| {
                json!({
                    "nukiId": outcome.nuki_id,
                    "name": outcome.name,
                    "success": outcome.report.succeeded,
                    "attempts": outcome.report.attempts,
                    "result": result_value(&outcome.report)
                })
            })
            .collect();

        let success_count = outcomes.iter().filter(|o| o.report.succeeded).count();
        let fail_count = outcomes.len() - success_count;

        Self::to_json(&json!({
            "action": action,
            "results": items,
            "summary": {
                "total": outcomes.len(),
                "succeeded": success_count,
                "failed": fail_count
            }
        }))
    }
}
