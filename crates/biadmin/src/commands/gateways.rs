//! Gateway command handlers.

use tabled::Tabled;

use biadmin_core::{
    AdminApi, Gateway, GetGateways, OperationType, SetGatewayInstallers,
    UpdateGatewayInstallersRequest,
};

use crate::cli::{GatewaysArgs, GatewaysCommand};
use crate::commands::Ctx;
use crate::commands::util;
use crate::error::CliError;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct GatewayRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn gateway_row(g: &Gateway) -> GatewayRow {
    GatewayRow {
        id: g.id.to_string(),
        name: g.name.clone(),
        kind: g.gateway_type.clone().unwrap_or_default(),
        status: g.status.clone().unwrap_or_default(),
    }
}

fn gateway_id(g: &Gateway) -> String {
    g.id.to_string()
}

#[derive(Tabled)]
struct InstallerRow {
    #[tabled(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Gateway Type")]
    gateway_type: String,
    #[tabled(rename = "Principals")]
    principals: String,
}

fn installer_row(r: &UpdateGatewayInstallersRequest) -> InstallerRow {
    InstallerRow {
        operation: r.operation.to_string(),
        gateway_type: r.gateway_type.to_string(),
        principals: r.ids.join("\n"),
    }
}

fn installer_ids(r: &UpdateGatewayInstallersRequest) -> String {
    r.ids.join("\n")
}

/// Revocation is the only destructive installer operation.
fn is_revocation(operation: Option<&str>) -> bool {
    operation
        .and_then(|op| op.parse::<OperationType>().ok())
        .is_some_and(|op| op == OperationType::Remove)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle<A: AdminApi>(api: &A, args: GatewaysArgs, ctx: Ctx) -> Result<(), CliError> {
    match args.command {
        GatewaysCommand::List => {
            util::run_command(&GetGateways, api, ctx.output, gateway_row, gateway_id).await
        }

        GatewaysCommand::SetInstallers {
            ids,
            operation,
            gateway_type,
        } => {
            if is_revocation(operation.as_deref()) && !ids.is_empty() {
                let prompt = format!("Revoke gateway installer rights for {} principal(s)?", ids.len());
                if !util::confirm(&prompt, ctx.yes, "gateways set-installers --operation remove")? {
                    util::notice(ctx.output, "Aborted");
                    return Ok(());
                }
            }

            let count = ids.len();
            let command = SetGatewayInstallers {
                ids,
                operation,
                gateway_type,
            };
            util::run_command(&command, api, ctx.output, installer_row, installer_ids).await?;
            util::success(
                ctx.output,
                &format!("Installer rights updated for {count} principal(s)"),
            );
            Ok(())
        }
    }
}
