// ── Wire-to-domain conversions ──
//
// Bridges raw `biadmin_api::types` payloads into canonical
// `biadmin_core::model` records. Fields are copied as-is; textual
// identifiers are parsed into `Uuid`. A malformed identifier is a
// `CoreError::Format`, never silently dropped.

use uuid::Uuid;

use biadmin_api::types::{ActivityEventResponse, GatewayResponse, GroupResponse, ReportResponse};

use crate::error::CoreError;
use crate::model::{ActivityEventPage, Gateway, Report, Workspace};

// ── Helpers ────────────────────────────────────────────────────────

fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw).map_err(|e| CoreError::Format {
        field: field.to_owned(),
        message: format!("'{raw}' is not a valid identifier: {e}"),
    })
}

fn parse_optional_uuid(field: &str, raw: Option<&str>) -> Result<Option<Uuid>, CoreError> {
    raw.filter(|s| !s.is_empty())
        .map(|s| parse_uuid(field, s))
        .transpose()
}

// ── Reports ────────────────────────────────────────────────────────

impl Report {
    pub fn from_wire(wire: ReportResponse) -> Result<Self, CoreError> {
        Ok(Self {
            id: parse_uuid("report.id", &wire.id)?,
            workspace_id: parse_optional_uuid("report.workspaceId", wire.workspace_id.as_deref())?,
            name: wire.name,
            web_url: wire.web_url,
            embed_url: wire.embed_url,
            datasource: None,
            dataset_id: wire.dataset_id,
        })
    }
}

// ── Gateways ───────────────────────────────────────────────────────

impl Gateway {
    pub fn from_wire(wire: GatewayResponse) -> Result<Self, CoreError> {
        let (public_key_exponent, public_key_modulus) = match wire.public_key {
            Some(key) => (Some(key.exponent), Some(key.modulus)),
            None => (None, None),
        };
        Ok(Self {
            id: parse_uuid("gateway.id", &wire.id)?,
            name: wire.name,
            gateway_type: wire.gateway_type,
            public_key_exponent,
            public_key_modulus,
            status: wire.gateway_status,
        })
    }
}

// ── Workspaces ─────────────────────────────────────────────────────

impl Workspace {
    pub fn from_wire(wire: GroupResponse) -> Result<Self, CoreError> {
        Ok(Self {
            id: parse_uuid("workspace.id", &wire.id)?,
            capacity_id: parse_optional_uuid("workspace.capacityId", wire.capacity_id.as_deref())?,
            name: wire.name,
            is_read_only: wire.is_read_only,
            is_on_dedicated_capacity: wire.is_on_dedicated_capacity,
            workspace_type: wire.group_type,
            state: wire.state,
        })
    }
}

// ── Activity events ────────────────────────────────────────────────

impl ActivityEventPage {
    /// Entities are kept opaque. The token survives only when it is
    /// non-empty and the service did not flag this page as the last one.
    pub fn from_wire(wire: ActivityEventResponse) -> Self {
        let last = wire.last_result_set.unwrap_or(false);
        let continuation_token = wire
            .continuation_token
            .filter(|token| !last && !token.is_empty());
        Self {
            entities: wire.activity_event_entities,
            continuation_token,
        }
    }
}
