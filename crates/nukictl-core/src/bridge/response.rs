//! Success judgment for bridge response bodies.
//!
//! The bridge has two response families: `/lockAction` answers with an
//! explicit boolean `success` field, while `/lockState` answers with the
//! current state and no success flag at all. A structurally valid HTTP
//! response therefore has to be classified before the retry loop can decide
//! whether the attempt worked.

use serde_json::Value;

/// Classification of one response body, decided once per response.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyVerdict {
    /// The body carries a boolean `success` field. Takes precedence over any
    /// other field the body may also contain.
    ExplicitSuccess(bool),
    /// No `success` field, but a `state` field is present: the shape of
    /// state-query responses, which have no way to report failure in-band.
    StateBearing(Value),
    /// Neither field present; the attempt cannot be judged successful.
    Unrecognized(Value),
}

impl BodyVerdict {
    /// Classify a response body.
    pub fn of(body: &Value) -> Self {
        if let Some(success) = body.get("success").and_then(Value::as_bool) {
            return BodyVerdict::ExplicitSuccess(success);
        }

        if let Some(state) = body.get("state") {
            return BodyVerdict::StateBearing(state.clone());
        }

        BodyVerdict::Unrecognized(body.clone())
    }

    /// Whether the response represents a completed action.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            BodyVerdict::ExplicitSuccess(true) | BodyVerdict::StateBearing(_)
        )
    }
}
