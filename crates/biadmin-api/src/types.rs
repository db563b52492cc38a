//! Wire-format types for the Power BI REST API.
//!
//! All types match the JSON bodies of the `/v1.0/myorg/` and `/v2.0/myorg/`
//! endpoints. Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Identifiers stay as strings here; `biadmin-core` parses them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Collections ──────────────────────────────────────────────────────

/// OData collection wrapper returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataList<T> {
    #[serde(rename = "@odata.context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

// ── Reports ──────────────────────────────────────────────────────────

/// Report from `GET reports`, `GET groups/{id}/reports`, `GET admin/reports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<String>,
    /// Only populated by the admin endpoint.
    #[serde(default)]
    pub workspace_id: Option<String>,
}

// ── Activity events ──────────────────────────────────────────────────

/// One page of audit events from `GET admin/activityevents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEventResponse {
    /// Opaque event payloads; the schema varies by activity type.
    #[serde(default)]
    pub activity_event_entities: Vec<Value>,
    #[serde(default)]
    pub continuation_uri: Option<String>,
    #[serde(default)]
    pub continuation_token: Option<String>,
    #[serde(default)]
    pub last_result_set: Option<bool>,
}

// ── Gateways ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPublicKey {
    pub exponent: String,
    pub modulus: String,
}

/// Gateway from `GET gateways`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub gateway_type: Option<String>,
    #[serde(default)]
    pub public_key: Option<GatewayPublicKey>,
    /// JSON-encoded status blob as returned by the service.
    #[serde(default)]
    pub gateway_status: Option<String>,
}

/// Body for `PATCH v2.0/myorg/gatewayInstallers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGatewayInstallersBody<'a> {
    pub ids: &'a [String],
    pub operation: &'a str,
    pub gateway_type: &'a str,
}

// ── Workspaces ───────────────────────────────────────────────────────

/// Workspace (group) from `GET groups` / `GET admin/groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub is_on_dedicated_capacity: bool,
    #[serde(default)]
    pub capacity_id: Option<String>,
    /// Admin endpoint only: `Workspace`, `PersonalGroup`, ...
    #[serde(rename = "type", default)]
    pub group_type: Option<String>,
    /// Admin endpoint only: `Active`, `Deleted`, ...
    #[serde(default)]
    pub state: Option<String>,
}

// ── Errors ───────────────────────────────────────────────────────────

/// Error envelope: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
