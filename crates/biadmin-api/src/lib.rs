// biadmin-api: Async Rust client for the Power BI REST API admin surface

pub mod client;
pub mod environment;
pub mod error;
pub mod transport;
pub mod types;

pub use client::PowerBiClient;
pub use environment::ServiceEnvironment;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
