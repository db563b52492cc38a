// ── Activity event page ──

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of audit events.
///
/// `continuation_token` is `Some` only when another page must be fetched;
/// an absent, empty, or final-set token is normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEventPage {
    pub entities: Vec<Value>,
    pub continuation_token: Option<String>,
}

impl ActivityEventPage {
    pub fn has_more(&self) -> bool {
        self.continuation_token.is_some()
    }
}
