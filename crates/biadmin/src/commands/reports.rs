//! Report command handlers.

use tabled::Tabled;

use biadmin_core::{AdminApi, GetReports, Report, Scope};

use crate::cli::{ReportsArgs, ReportsCommand};
use crate::commands::Ctx;
use crate::commands::util;
use crate::error::CliError;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Dataset")]
    dataset: String,
    #[tabled(rename = "Workspace")]
    workspace: String,
}

fn report_row(r: &Report) -> ReportRow {
    ReportRow {
        id: r.id.to_string(),
        name: r.name.clone(),
        dataset: r.dataset_id.clone().unwrap_or_default(),
        workspace: r.workspace_id.map(|id| id.to_string()).unwrap_or_default(),
    }
}

fn report_id(r: &Report) -> String {
    r.id.to_string()
}

pub async fn handle<A: AdminApi>(api: &A, args: ReportsArgs, ctx: Ctx) -> Result<(), CliError> {
    let command = match args.command {
        ReportsCommand::List { scope, workspace } => GetReports {
            scope: util::scope(scope),
            workspace_id: util::parse_optional_guid("workspace", workspace.as_deref())?,
            report_id: None,
        },
        ReportsCommand::Get { id, workspace } => GetReports {
            scope: Scope::Individual,
            workspace_id: util::parse_optional_guid("workspace", workspace.as_deref())?,
            report_id: Some(util::parse_guid("id", &id)?),
        },
    };
    util::run_command(&command, api, ctx.output, report_row, report_id).await
}
