//! Shared helpers for command handlers.

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use biadmin_core::{AdminApi, AdminCommand, Scope, invoke};

use crate::cli::ScopeArg;
use crate::error::CliError;
use crate::output::{OutputOpts, PrintSink};

/// Run a core command, streaming its output through a [`PrintSink`].
///
/// Partial output is flushed before a command error is returned.
pub async fn run_command<C, A, R>(
    command: &C,
    api: &A,
    opts: OutputOpts,
    to_row: fn(&C::Output) -> R,
    id_fn: fn(&C::Output) -> String,
) -> Result<(), CliError>
where
    C: AdminCommand,
    C::Output: Serialize,
    A: AdminApi,
    R: Tabled,
{
    let mut sink = PrintSink::new(opts, to_row, id_fn);
    let result = invoke(command, api, &mut sink).await;
    let finished = sink.finish();
    result?;
    finished
}

pub fn scope(arg: ScopeArg) -> Scope {
    match arg {
        ScopeArg::Individual => Scope::Individual,
        ScopeArg::Organization => Scope::Organization,
    }
}

/// Parse a GUID argument.
pub fn parse_guid(field: &str, raw: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(raw.trim()).map_err(|e| CliError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not a GUID: {e}"),
    })
}

pub fn parse_optional_guid(field: &str, raw: Option<&str>) -> Result<Option<Uuid>, CliError> {
    raw.map(|r| parse_guid(field, r)).transpose()
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool, action: &str) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Print a success line on stderr.
pub fn success(opts: OutputOpts, message: &str) {
    if opts.quiet {
        return;
    }
    if opts.color {
        eprintln!("{} {message}", "✓".green());
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print a notice on stderr.
pub fn notice(opts: OutputOpts, message: &str) {
    if opts.quiet {
        return;
    }
    if opts.color {
        eprintln!("{}", message.dimmed());
    } else {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_parse_errors_are_validation() {
        let err = parse_guid("workspace", "abc").err();
        assert!(matches!(err, Some(CliError::Validation { ref field, .. }) if field == "workspace"));
        assert!(parse_guid("workspace", " f089354e-8366-4e18-aea3-4cb4a3a50b48 ").is_ok());
    }

    #[test]
    fn yes_skips_prompt() {
        assert!(matches!(confirm("sure?", true, "remove"), Ok(true)));
    }
}
