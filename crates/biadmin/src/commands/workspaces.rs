//! Workspace command handlers.

use tabled::Tabled;

use biadmin_core::{AdminApi, GetWorkspaces, Workspace};

use crate::cli::{WorkspacesArgs, WorkspacesCommand};
use crate::commands::Ctx;
use crate::commands::util;
use crate::error::CliError;

#[derive(Tabled)]
struct WorkspaceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Read-only")]
    read_only: String,
    #[tabled(rename = "Dedicated")]
    dedicated: String,
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.into()
}

fn workspace_row(w: &Workspace) -> WorkspaceRow {
    WorkspaceRow {
        id: w.id.to_string(),
        name: w.name.clone(),
        kind: w.workspace_type.clone().unwrap_or_default(),
        state: w.state.clone().unwrap_or_default(),
        read_only: yes_no(w.is_read_only),
        dedicated: yes_no(w.is_on_dedicated_capacity),
    }
}

fn workspace_id(w: &Workspace) -> String {
    w.id.to_string()
}

pub async fn handle<A: AdminApi>(
    api: &A,
    args: WorkspacesArgs,
    ctx: Ctx,
) -> Result<(), CliError> {
    match args.command {
        WorkspacesCommand::List {
            scope,
            filter,
            first,
            skip,
            all,
        } => {
            let command = GetWorkspaces {
                scope: util::scope(scope),
                filter,
                top: first,
                skip,
                all,
            };
            util::run_command(&command, api, ctx.output, workspace_row, workspace_id).await
        }
    }
}
