//! Single-device commands: open, close, status.

use nukictl_core::bridge::LockAction;
use nukictl_core::retry::AttemptReport;

use crate::cli::TargetArgs;
use crate::error::{CliError, Result};
use crate::output::get_formatter;
use crate::settings::{resolve_target, Settings};

/// Run open/close on one device.
pub async fn run_lock_action(
    settings: &Settings,
    target: &TargetArgs,
    action: LockAction,
    json: bool,
) -> Result<()> {
    let client = settings.client()?;
    let nuki_id = resolve_target(&client, settings, target).await?;

    let report = settings
        .policy()
        .run(|| {
            let client = client.clone();
            async move { client.lock_action(nuki_id, action).await }
        })
        .await;

    finish(action.verb(), nuki_id, report, json)
}

/// Run status on one device.
///
/// `/lockState` polls the lock over BLE, so it gets the same retry treatment
/// as lock actions; its state-bearing response shape is what the success
/// policy's second rule exists for.
pub async fn run_status(settings: &Settings, target: &TargetArgs, json: bool) -> Result<()> {
    let client = settings.client()?;
    let nuki_id = resolve_target(&client, settings, target).await?;

    let report = settings
        .policy()
        .run(|| {
            let client = client.clone();
            async move { client.lock_state(nuki_id).await }
        })
        .await;

    finish("status", nuki_id, report, json)
}

fn finish(action: &str, nuki_id: u64, report: AttemptReport, json: bool) -> Result<()> {
    let formatter = get_formatter(json);
    println!("{}", formatter.format_action_result(action, nuki_id, &report));

    if !report.succeeded {
        return Err(CliError::ActionFailed {
            action: action.to_string(),
            nuki_id,
            attempts: report.attempts,
            detail: report.describe(),
        });
    }

    Ok(())
}
