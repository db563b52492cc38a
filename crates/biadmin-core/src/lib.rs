//! Domain layer between `biadmin-api` and the CLI.
//!
//! - **[`AdminApi`]**: Facade trait with one method per remote operation,
//!   implemented for [`PowerBiClient`](biadmin_api::PowerBiClient). Tests
//!   supply an in-memory fake.
//!
//! - **Commands** ([`command`]): One [`AdminCommand`] per admin operation.
//!   [`invoke`] validates parameters, drives the facade (following
//!   continuation tokens or `$skip` offsets), and streams results into an
//!   [`OutputSink`].
//!
//! - **Domain model** ([`model`]): `Report`, `Gateway`, `Workspace`,
//!   `ActivityEventPage`, built from wire payloads by explicit `from_wire`
//!   conversions.
//!
//! - **[`ErrorRecord`]**: What a failed command leaves behind in the sink.

pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod facade;
pub mod model;
pub mod sink;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::reports::ReportQuery;
pub use command::workspaces::{DEFAULT_PAGE_SIZE, WorkspaceQuery};
pub use command::{
    ActivityEventQuery, AdminCommand, GetActivityEvents, GetGateways, GetReports, GetWorkspaces,
    SetGatewayInstallers, UpdateGatewayInstallersRequest, invoke,
};
pub use config::{ClientConfig, TlsVerification};
pub use error::{CoreError, TransientKind};
pub use facade::AdminApi;
pub use sink::{ErrorCategory, ErrorRecord, MemorySink, OutputSink};

pub use model::{ActivityEventPage, Gateway, GatewayType, OperationType, Report, Scope, Workspace};
