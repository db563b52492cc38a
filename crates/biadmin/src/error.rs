//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use biadmin_config::ConfigError;
use biadmin_core::{CoreError, TransientKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Power BI service: {message}")]
    #[diagnostic(
        code(biadmin::connection_failed),
        help(
            "Check network access to the API root, or set --api-url.\n\
             Corporate TLS proxies need ca_cert in your profile."
        )
    )]
    ConnectionFailed { message: String },

    #[error("Service is throttling or unavailable: {message}")]
    #[diagnostic(
        code(biadmin::transient),
        help("The request was not retried. Wait and run the command again.")
    )]
    Transient { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(biadmin::auth_failed),
        help(
            "The access token was rejected or lacks admin rights.\n\
             Acquire a fresh token and run: biadmin config set-token --profile {profile}"
        )
    )]
    AuthFailed { message: String, profile: String },

    #[error("No access token configured for profile '{profile}'")]
    #[diagnostic(
        code(biadmin::no_credentials),
        help(
            "Pass --token, set BIADMIN_TOKEN, or store one with: biadmin config set-token\n\
             A profile may also name an environment variable via token_env."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(biadmin::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
        #[help]
        list_hint: Option<String>,
    },

    #[error("Conflict: {message}")]
    #[diagnostic(code(biadmin::conflict))]
    Conflict { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({code}): {message}")]
    #[diagnostic(code(biadmin::api_error))]
    ApiError { code: String, message: String },

    #[error("Unexpected response from the service: {message}")]
    #[diagnostic(
        code(biadmin::format),
        help("The service returned data biadmin could not decode. Re-run with -vv for details.")
    )]
    Format { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(biadmin::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(biadmin::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: biadmin config set environment public --profile {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(biadmin::config))]
    Config(Box<figment::Error>),

    #[error("Keyring error: {0}")]
    #[diagnostic(
        code(biadmin::keyring),
        help("Store the token in the config file or an environment variable instead.")
    )]
    Keyring(#[from] keyring::Error),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(biadmin::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out: {message}")]
    #[diagnostic(
        code(biadmin::timeout),
        help("Increase timeout with --timeout or narrow the query window.")
    )]
    Timeout { message: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(biadmin::serialize))]
    Serialize(String),

    #[error("Failed to write config: {0}")]
    #[diagnostic(code(biadmin::config_write))]
    ConfigWrite(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Transient { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the active profile name to auth failures.
    pub fn with_profile(self, name: &str) -> Self {
        match self {
            Self::AuthFailed { message, .. } => Self::AuthFailed {
                message,
                profile: name.to_owned(),
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, reason } => CliError::Validation { field, reason },

            CoreError::Authentication { message } => CliError::AuthFailed {
                message,
                profile: "default".into(),
            },

            CoreError::NotFound {
                resource,
                identifier,
            } => CliError::NotFound {
                list_hint: list_command(&resource)
                    .map(|cmd| format!("Run: biadmin {cmd} to see available {resource}s")),
                resource_type: resource,
                identifier,
            },

            CoreError::Conflict { message } => CliError::Conflict { message },

            CoreError::Transient {
                kind,
                message,
                retry_after_secs,
            } => match kind {
                TransientKind::Timeout => CliError::Timeout { message },
                TransientKind::Connect => CliError::ConnectionFailed { message },
                TransientKind::Throttled | TransientKind::Server => {
                    let message = match retry_after_secs {
                        Some(secs) => format!("{message} (retry after {secs}s)"),
                        None => message,
                    };
                    CliError::Transient { message }
                }
            },

            CoreError::Remote {
                message,
                code,
                status,
            } => CliError::ApiError {
                code: code
                    .or_else(|| status.map(|s| format!("HTTP {s}")))
                    .unwrap_or_else(|| "unknown".into()),
                message,
            },

            CoreError::Format { field, message } => CliError::Format {
                message: format!("{field}: {message}"),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

/// The `biadmin` subcommand that lists resources of this kind, if any.
fn list_command(resource: &str) -> Option<&'static str> {
    match resource {
        "report" => Some("reports list"),
        "workspace" => Some("workspaces list"),
        "gateway" => Some("gateways list"),
        _ => None,
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Serialization(e) => CliError::ConfigWrite(e),
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Keyring(e) => CliError::Keyring(e),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
