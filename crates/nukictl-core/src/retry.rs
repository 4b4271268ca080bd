//! Bounded retry loop around a single bridge operation.
//!
//! The bridge link is local and low-traffic, so the policy stays minimal:
//! a fixed number of attempts with a fixed delay between them. No backoff,
//! no jitter, no circuit breaking.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::bridge::BodyVerdict;
use crate::error::BridgeError;

/// Retry policy: attempt budget and fixed inter-attempt delay.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    budget: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Fixed delay between attempts.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// Policy with `budget` attempts (clamped to a minimum of 1).
    pub fn new(budget: u32) -> Self {
        Self::with_delay(budget, Self::DEFAULT_DELAY)
    }

    /// Policy with an explicit delay. Tests use this to avoid real sleeps.
    pub fn with_delay(budget: u32, delay: Duration) -> Self {
        Self {
            budget: budget.max(1),
            delay,
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Drive `op` until one attempt is judged successful or the budget is
    /// exhausted.
    ///
    /// A transport/protocol failure and an HTTP-level success whose body is
    /// judged unsuccessful (see [`BodyVerdict`]) both count against the
    /// budget. The report always carries the last body or error so callers
    /// have something to show even on exhaustion.
    pub async fn run<F, Fut>(&self, mut op: F) -> AttemptReport
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Value, BridgeError>>,
    {
        let mut last = None;

        for attempt in 1..=self.budget {
            match op().await {
                Ok(body) => {
                    if BodyVerdict::of(&body).is_success() {
                        return AttemptReport {
                            succeeded: true,
                            attempts: attempt,
                            last: AttemptOutcome::Response(body),
                        };
                    }
                    last = Some(AttemptOutcome::Response(body));
                }
                Err(e) => {
                    last = Some(AttemptOutcome::Failed(e));
                }
            }

            if attempt < self.budget {
                tokio::time::sleep(self.delay).await;
            }
        }

        AttemptReport {
            succeeded: false,
            attempts: self.budget,
            last: last.unwrap(),
        }
    }
}

/// Outcome of a retried operation.
#[derive(Debug)]
pub struct AttemptReport {
    pub succeeded: bool,
    /// Attempts consumed, including the final one.
    pub attempts: u32,
    pub last: AttemptOutcome,
}

/// What the final attempt produced.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// A parsed body was obtained (judged successful or not).
    Response(Value),
    /// The final attempt failed before a body could be parsed.
    Failed(BridgeError),
}

impl AttemptReport {
    /// Last response body, if the final attempt got that far.
    pub fn body(&self) -> Option<&Value> {
        match &self.last {
            AttemptOutcome::Response(body) => Some(body),
            AttemptOutcome::Failed(_) => None,
        }
    }

    /// One-line description of the final outcome, for reporting.
    pub fn describe(&self) -> String {
        match &self.last {
            AttemptOutcome::Response(body) => body.to_string(),
            AttemptOutcome::Failed(e) => e.to_string(),
        }
    }
}
