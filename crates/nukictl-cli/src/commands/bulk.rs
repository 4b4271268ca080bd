//! Bulk lock operations: openall and closeall.
//!
//! Devices are processed strictly one at a time so console output follows
//! processing order and the bridge never sees two requests at once.

use indicatif::{ProgressBar, ProgressStyle};

use nukictl_core::bridge::LockAction;
use nukictl_core::bulk::{run_lock_action_all, BulkProgress, NoopProgress};
use nukictl_core::device::{parse_device_list, NukiDevice};

use crate::error::{CliError, Result};
use crate::output::get_formatter;
use crate::settings::Settings;

/// Per-device progress bar using indicatif.
struct BarProgress {
    bar: ProgressBar,
}

impl BulkProgress for BarProgress {
    fn on_device(&self, device: &NukiDevice) {
        self.bar.set_message(device.name.clone());
    }

    fn on_outcome(&self, _device: &NukiDevice, _succeeded: bool) {
        self.bar.inc(1);
    }
}

/// Run openall/closeall across every device the bridge knows.
pub async fn run_bulk(
    settings: &Settings,
    action: LockAction,
    json: bool,
    strict: bool,
) -> Result<()> {
    let formatter = get_formatter(json);
    let client = settings.client()?;

    // The device list fetch itself is a one-shot diagnostic query.
    let devices = parse_device_list(client.list().await?)?;

    if devices.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    if !json {
        println!("Running '{}' on {} device(s)...", action.verb(), devices.len());
    }

    let policy = settings.policy();
    let outcomes = if json {
        run_lock_action_all(&client, policy, &devices, action, &NoopProgress).await
    } else {
        let bar = ProgressBar::new(devices.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        let progress = BarProgress { bar };
        let outcomes = run_lock_action_all(&client, policy, &devices, action, &progress).await;
        progress.bar.finish_and_clear();
        outcomes
    };

    println!("{}", formatter.format_bulk_results(action.verb(), &outcomes));

    let failed_count = outcomes.iter().filter(|o| !o.report.succeeded).count();
    if strict && failed_count > 0 {
        return Err(CliError::PartialFailure {
            succeeded: outcomes.len() - failed_count,
            failed: failed_count,
        });
    }

    Ok(())
}
