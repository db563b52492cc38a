//! Clap derive structures for the `biadmin` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Depends only on clap so `build.rs` can include it for man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// biadmin -- Power BI tenant administration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "biadmin",
    version,
    about = "Administer a Power BI tenant from the command line",
    long_about = "Audit activity events, list reports and workspaces, and manage\n\
        gateway installers through the Power BI REST API.\n\n\
        An access token must be supplied via --token, BIADMIN_TOKEN, the\n\
        system keyring, or the config file.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Tenant profile to use
    #[arg(long, short = 'p', env = "BIADMIN_PROFILE", global = true)]
    pub profile: Option<String>,

    /// REST API root, e.g. https://api.powerbi.com (overrides profile)
    #[arg(long, env = "BIADMIN_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer access token
    #[arg(long, env = "BIADMIN_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(long, short = 'o', env = "BIADMIN_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "BIADMIN_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON array
    Json,
    /// One compact JSON object per line
    JsonCompact,
    /// YAML documents
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Whose resources a list enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScopeArg {
    /// Resources the caller can access
    #[default]
    Individual,
    /// Every resource in the tenant (admin APIs)
    Organization,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query the tenant audit log
    #[command(alias = "activity", alias = "ae")]
    ActivityEvents(ActivityEventsArgs),

    /// List or fetch reports
    #[command(alias = "rpt")]
    Reports(ReportsArgs),

    /// List gateways and manage installer rights
    #[command(alias = "gw")]
    Gateways(GatewaysArgs),

    /// List workspaces
    #[command(alias = "ws")]
    Workspaces(WorkspacesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ACTIVITY EVENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ActivityEventsArgs {
    #[command(subcommand)]
    pub command: ActivityEventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ActivityEventsCommand {
    /// Retrieve audit events between two timestamps on the same UTC day
    Get {
        /// Window start, e.g. 2019-08-15T20:00:00Z
        #[arg(long, short = 's', alias = "start-date-time")]
        start: String,

        /// Window end (same UTC day as --start)
        #[arg(long, short = 'e', alias = "end-date-time")]
        end: String,

        /// Only events of this activity, e.g. ViewReport
        #[arg(long)]
        activity_type: Option<String>,

        /// Only events by this user principal name
        #[arg(long)]
        user: Option<String>,

        /// Raw OData filter (exclusive with --activity-type/--user)
        #[arg(long)]
        filter: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REPORTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReportsArgs {
    #[command(subcommand)]
    pub command: ReportsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReportsCommand {
    /// List reports
    #[command(alias = "ls")]
    List {
        /// Individual (own) or Organization (tenant-wide)
        #[arg(long, value_enum, default_value = "individual")]
        scope: ScopeArg,

        /// Restrict to one workspace (GUID)
        #[arg(long, short = 'w')]
        workspace: Option<String>,
    },

    /// Fetch one report by id
    Get {
        /// Report id (GUID)
        id: String,

        /// Workspace containing the report (GUID)
        #[arg(long, short = 'w')]
        workspace: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GATEWAYS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GatewaysArgs {
    #[command(subcommand)]
    pub command: GatewaysCommand,
}

#[derive(Debug, Subcommand)]
pub enum GatewaysCommand {
    /// List gateways the caller administers
    #[command(alias = "ls")]
    List,

    /// Grant or revoke gateway installer rights
    SetInstallers {
        /// Principal (user) id; repeat for several
        #[arg(long = "id", short = 'i', value_name = "PRINCIPAL")]
        ids: Vec<String>,

        /// None, Add, or Remove
        #[arg(long)]
        operation: Option<String>,

        /// Resource (on-premises) or VirtualNetwork
        #[arg(long)]
        gateway_type: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  WORKSPACES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct WorkspacesArgs {
    #[command(subcommand)]
    pub command: WorkspacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum WorkspacesCommand {
    /// List workspaces
    #[command(alias = "ls")]
    List {
        /// Individual (own) or Organization (tenant-wide)
        #[arg(long, value_enum, default_value = "individual")]
        scope: ScopeArg,

        /// Raw OData filter
        #[arg(long)]
        filter: Option<String>,

        /// Page size ($top); required for Organization scope without --all
        #[arg(long, alias = "top")]
        first: Option<u32>,

        /// Records to skip ($skip)
        #[arg(long)]
        skip: Option<u32>,

        /// Fetch every page
        #[arg(long, short = 'a')]
        all: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration (secrets masked)
    Show,

    /// Set a value on the active profile
    Set {
        /// One of: environment, api_url, token, token_env, timeout, ca_cert
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an access token for the active profile in the system keyring
    SetToken,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
