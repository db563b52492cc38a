// ── Validated request records ──
//
// Each command turns its raw parameters into one of these before any
// network call. Constructing one is the validation step: a value of
// these types is always safe to hand to the facade.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{GatewayType, OperationType};

// ── Activity events ────────────────────────────────────────────────

/// Page-scoping parameters for the audit-event endpoint.
///
/// `start` and `end` hold the caller's text wrapped in single quotes,
/// ready to be sent as OData datetime literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEventQuery {
    pub start: String,
    pub end: String,
    pub filter: Option<String>,
}

impl ActivityEventQuery {
    /// Validate the raw parameters.
    ///
    /// Both timestamps must parse, `end` must not precede `start`, and both
    /// must fall on the same UTC day. `filter` is raw OData and may not be
    /// combined with the `activity_type` / `user` shortcuts.
    pub fn new(
        start_date_time: &str,
        end_date_time: &str,
        activity_type: Option<&str>,
        user: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Self, CoreError> {
        let start = parse_timestamp("StartDateTime", start_date_time)?;
        let end = parse_timestamp("EndDateTime", end_date_time)?;

        if end < start {
            return Err(CoreError::validation(
                "EndDateTime",
                format!("{end_date_time} is earlier than StartDateTime {start_date_time}"),
            ));
        }
        if start.date_naive() != end.date_naive() {
            return Err(CoreError::validation(
                "EndDateTime",
                "StartDateTime and EndDateTime must be within the same UTC day",
            ));
        }

        let filter = build_filter(activity_type, user, filter)?;

        Ok(Self {
            start: format!("'{}'", start_date_time.trim()),
            end: format!("'{}'", end_date_time.trim()),
            filter,
        })
    }
}

/// Accept RFC 3339 (`2019-08-15T20:00:00Z`) or a bare
/// `2019-08-15T20:00:00[.fff]`, read as UTC.
fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::validation(field, "a timestamp is required"));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| CoreError::validation(field, format!("'{raw}' is not a valid timestamp: {e}")))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn build_filter(
    activity_type: Option<&str>,
    user: Option<&str>,
    filter: Option<&str>,
) -> Result<Option<String>, CoreError> {
    let activity_type = non_blank(activity_type);
    let user = non_blank(user);

    if let Some(raw) = non_blank(filter) {
        if activity_type.is_some() || user.is_some() {
            return Err(CoreError::validation(
                "Filter",
                "cannot be combined with ActivityType or User",
            ));
        }
        return Ok(Some(raw.to_owned()));
    }

    let mut clauses = Vec::new();
    if let Some(activity) = activity_type {
        clauses.push(format!("Activity eq '{}'", odata_escape(&activity.to_lowercase())));
    }
    if let Some(user) = user {
        clauses.push(format!("UserId eq '{}'", odata_escape(user)));
    }
    Ok((!clauses.is_empty()).then(|| clauses.join(" and ")))
}

/// OData string literals escape a single quote by doubling it.
fn odata_escape(value: &str) -> String {
    value.replace('\'', "''")
}

// ── Gateway installers ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGatewayInstallersRequest {
    pub ids: Vec<String>,
    pub operation: OperationType,
    pub gateway_type: GatewayType,
}

impl UpdateGatewayInstallersRequest {
    /// Validate the raw parameters. Every field is required; enum values are
    /// matched case-insensitively.
    pub fn new(
        ids: &[String],
        operation: Option<&str>,
        gateway_type: Option<&str>,
    ) -> Result<Self, CoreError> {
        if ids.is_empty() {
            return Err(CoreError::validation("Ids", "at least one principal id is required"));
        }
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(CoreError::validation("Ids", "principal ids cannot be blank"));
        }

        let operation = non_blank(operation)
            .ok_or_else(|| CoreError::validation("Operation", "an operation is required"))?;
        let operation: OperationType = operation.parse().map_err(|_| {
            CoreError::validation(
                "Operation",
                format!("'{operation}' is not one of None, Add, Remove"),
            )
        })?;

        let gateway_type = non_blank(gateway_type)
            .ok_or_else(|| CoreError::validation("GatewayType", "a gateway type is required"))?;
        let gateway_type: GatewayType = gateway_type.parse().map_err(|_| {
            CoreError::validation(
                "GatewayType",
                format!("'{gateway_type}' is not one of Resource, VirtualNetwork"),
            )
        })?;

        Ok(Self {
            ids: ids.iter().map(|id| id.trim().to_owned()).collect(),
            operation,
            gateway_type,
        })
    }
}
