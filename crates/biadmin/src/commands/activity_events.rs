//! Activity event command handlers.

use serde_json::Value;
use tabled::Tabled;

use biadmin_core::{AdminApi, GetActivityEvents};

use crate::cli::{ActivityEventsArgs, ActivityEventsCommand};
use crate::commands::Ctx;
use crate::commands::util;
use crate::error::CliError;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Workspace")]
    workspace: String,
}

/// Audit events are schemaless; missing fields render empty.
fn text(event: &Value, key: &str) -> String {
    event
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn event_row(event: &Value) -> EventRow {
    EventRow {
        time: text(event, "CreationTime"),
        activity: text(event, "Activity"),
        user: text(event, "UserId"),
        item: text(event, "ItemName"),
        workspace: text(event, "WorkSpaceName"),
    }
}

fn event_id(event: &Value) -> String {
    text(event, "Id")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle<A: AdminApi>(
    api: &A,
    args: ActivityEventsArgs,
    ctx: Ctx,
) -> Result<(), CliError> {
    match args.command {
        ActivityEventsCommand::Get {
            start,
            end,
            activity_type,
            user,
            filter,
        } => {
            let command = GetActivityEvents {
                start_date_time: start,
                end_date_time: end,
                activity_type,
                user,
                filter,
            };
            util::run_command(&command, api, ctx.output, event_row, event_id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_tolerate_missing_fields() {
        let event = serde_json::json!({
            "Id": "8b0c2bd2",
            "CreationTime": "2019-08-15T20:01:02",
            "Activity": "ViewReport",
        });
        let row = event_row(&event);
        assert_eq!(row.activity, "ViewReport");
        assert_eq!(row.user, "");
        assert_eq!(event_id(&event), "8b0c2bd2");
    }
}
