//! Command dispatch: bridges CLI args -> core commands -> output formatting.

pub mod activity_events;
pub mod config_cmd;
pub mod gateways;
pub mod reports;
pub mod util;
pub mod workspaces;

use biadmin_core::AdminApi;

use crate::cli::Command;
use crate::error::CliError;
use crate::output::OutputOpts;

/// Per-invocation settings shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct Ctx {
    pub output: OutputOpts,
    /// `--yes`: skip confirmation prompts.
    pub yes: bool,
}

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch<A: AdminApi>(cmd: Command, api: &A, ctx: Ctx) -> Result<(), CliError> {
    match cmd {
        Command::ActivityEvents(args) => activity_events::handle(api, args, ctx).await,
        Command::Reports(args) => reports::handle(api, args, ctx).await,
        Command::Gateways(args) => gateways::handle(api, args, ctx).await,
        Command::Workspaces(args) => workspaces::handle(api, args, ctx).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
