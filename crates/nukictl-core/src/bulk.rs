//! Sequential bulk lock actions.
//!
//! The bridge is a single constrained embedded device, so bulk operations
//! keep exactly one request in flight: devices are processed strictly in
//! list order, and a device that exhausts its retries never stops the rest.

use crate::bridge::{BridgeClient, LockAction};
use crate::device::NukiDevice;
use crate::retry::{AttemptReport, RetryPolicy};

/// Per-device observer for bulk runs.
///
/// The CLI drives a progress bar with this; headless callers use
/// [`NoopProgress`].
pub trait BulkProgress {
    fn on_device(&self, device: &NukiDevice);
    fn on_outcome(&self, device: &NukiDevice, succeeded: bool);
}

/// No-op progress handler for when progress tracking isn't needed.
pub struct NoopProgress;

impl BulkProgress for NoopProgress {
    fn on_device(&self, _device: &NukiDevice) {}
    fn on_outcome(&self, _device: &NukiDevice, _succeeded: bool) {}
}

/// Outcome of one device within a bulk run.
#[derive(Debug)]
pub struct DeviceOutcome {
    pub nuki_id: u64,
    pub name: String,
    pub report: AttemptReport,
}

/// Run a retry-wrapped lock action against every device, one at a time.
///
/// Outcomes are returned in processing order, which equals `devices` order.
pub async fn run_lock_action_all<P: BulkProgress>(
    client: &BridgeClient,
    policy: RetryPolicy,
    devices: &[NukiDevice],
    action: LockAction,
    progress: &P,
) -> Vec<DeviceOutcome> {
    let mut outcomes = Vec::with_capacity(devices.len());

    for device in devices {
        progress.on_device(device);

        let report = policy
            .run(|| {
                let client = client.clone();
                let nuki_id = device.nuki_id;
                async move { client.lock_action(nuki_id, action).await }
            })
            .await;

        progress.on_outcome(device, report.succeeded);
        outcomes.push(DeviceOutcome {
            nuki_id: device.nuki_id,
            name: device.name.clone(),
            report,
        });
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::parse_device_list;
    use mockito::Matcher;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_one_exhausted_device_does_not_halt_the_rest() {
        let mut server = mockito::Server::new_async().await;

        let mut ok_mock = |id: &str| {
            server
                .mock("GET", "/lockAction")
                .match_query(Matcher::UrlEncoded("nukiId".into(), id.into()))
                .with_status(200)
                .with_body(r#"{"success": true}"#)
        };

        let first = ok_mock("1").expect(1).create_async().await;
        let third = ok_mock("3").expect(1).create_async().await;
        let second = server
            .mock("GET", "/lockAction")
            .match_query(Matcher::UrlEncoded("nukiId".into(), "2".into()))
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let devices = parse_device_list(json!([
            {"name": "Front", "nukiId": 1},
            {"name": "Back", "nukiId": 2},
            {"name": "Garage", "nukiId": 3}
        ]))
        .unwrap();

        let client =
            BridgeClient::new(server.url(), "tkn", Duration::from_secs(2)).unwrap();
        let policy = RetryPolicy::with_delay(2, Duration::ZERO);

        let outcomes =
            run_lock_action_all(&client, policy, &devices, LockAction::Unlock, &NoopProgress)
                .await;

        // All three attempted, processing order preserved.
        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes.iter().map(|o| o.nuki_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        assert!(outcomes[0].report.succeeded);
        assert_eq!(outcomes[0].report.attempts, 1);

        assert!(!outcomes[1].report.succeeded);
        assert_eq!(outcomes[1].report.attempts, 2);

        assert!(outcomes[2].report.succeeded);

        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
    }
}
