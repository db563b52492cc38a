// ── Domain model ──
//
// Canonical records built from wire payloads, one per invocation.
// Construction from wire types lives in `crate::convert`.

pub mod activity;
pub mod gateway;
pub mod report;
pub mod scope;
pub mod workspace;

pub use activity::ActivityEventPage;
pub use gateway::{Gateway, GatewayType, OperationType};
pub use report::Report;
pub use scope::Scope;
pub use workspace::Workspace;
