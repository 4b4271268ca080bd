//! Table-formatted output for humans.

use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use nukictl_core::bulk::DeviceOutcome;
use nukictl_core::device::{LastKnownState, NukiDevice};
use nukictl_core::retry::AttemptReport;

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn battery_cell(state: Option<&LastKnownState>) -> Cell {
    match state {
        Some(s) => {
            let charge = s
                .battery_charge_state
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| "-".to_string());

            if s.battery_critical == Some(true) {
                Cell::new(format!("{} (critical)", charge)).fg(Color::Red)
            } else {
                Cell::new(charge)
            }
        }
        None => Cell::new("-"),
    }
}

fn format_last_seen(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, devices: &[NukiDevice]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Name", "Nuki ID", "Type", "Firmware", "State", "Battery", "Door", "Last Seen",
        ]);

        for device in devices {
            let state = device.last_known_state.as_ref();
            table.add_row(vec![
                Cell::new(&device.name),
                Cell::new(device.nuki_id.to_string()),
                Cell::new(device.device_type_name()),
                Cell::new(device.firmware_version.as_deref().unwrap_or("-")),
                Cell::new(state.and_then(|s| s.state_name.as_deref()).unwrap_or("-")),
                battery_cell(state),
                Cell::new(
                    state
                        .and_then(|s| s.doorsensor_state_name.as_deref())
                        .unwrap_or("-"),
                ),
                Cell::new(
                    state
                        .and_then(|s| s.timestamp.as_deref())
                        .map(format_last_seen)
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ]);
        }

        format!("{}\n\nFound {} device(s)", table, devices.len())
    }

    fn format_info(&self, info: &Value) -> String {
        serde_json::to_string_pretty(info).unwrap_or_default()
    }

    fn format_action_result(&self, action: &str, nuki_id: u64, report: &AttemptReport) -> String {
        let status = if report.succeeded {
            "[OK]".green()
        } else {
            "[FAIL]".red()
        };

        let attempts = if report.attempts == 1 {
            "1 attempt".to_string()
        } else {
            format!("{} attempts", report.attempts)
        };

        format!(
            "{} {} device {} ({})\n{}",
            status,
            action,
            nuki_id,
            attempts,
            report.describe()
        )
    }

    fn format_bulk_results(&self, action: &str, outcomes: &[DeviceOutcome]) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Device", "Nuki ID", "Status", "Attempts", "Result"]);

        let mut success_count = 0;
        let mut fail_count = 0;

        for outcome in outcomes {
            let status_cell = if outcome.report.succeeded {
                success_count += 1;
                Cell::new("OK").fg(Color::Green)
            } else {
                fail_count += 1;
                Cell::new("FAIL").fg(Color::Red)
            };

            table.add_row(vec![
                Cell::new(&outcome.name),
                Cell::new(outcome.nuki_id.to_string()),
                status_cell,
                Cell::new(outcome.report.attempts.to_string()),
                Cell::new(truncate(&outcome.report.describe(), 60)),
            ]);
        }

        let summary = format!(
            "\n{} summary: {} succeeded, {} failed",
            action,
            success_count.to_string().green(),
            fail_count.to_string().red()
        );

        format!("{}{}", table, summary)
    }
}
