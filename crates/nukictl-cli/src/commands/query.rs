//! Read-only bridge queries: list and info.
//!
//! One request each, no retry wrapping.

use nukictl_core::device::parse_device_list;

use crate::error::Result;
use crate::output::get_formatter;
use crate::settings::Settings;

/// Run the list command.
pub async fn run_list(settings: &Settings, json: bool) -> Result<()> {
    let formatter = get_formatter(json);
    let client = settings.client()?;

    let body = client.list().await?;
    let devices = parse_device_list(body)?;

    println!("{}", formatter.format_devices(&devices));

    Ok(())
}

/// Run the info command.
pub async fn run_info(settings: &Settings, json: bool) -> Result<()> {
    let formatter = get_formatter(json);
    let client = settings.client()?;

    let info = client.info().await?;

    println!("{}", formatter.format_info(&info));

    Ok(())
}
