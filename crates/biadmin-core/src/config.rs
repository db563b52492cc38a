// ── Runtime connection configuration ──
//
// These types describe *how* to reach the Power BI service. They carry the
// access token and transport tuning, but never touch disk. The CLI builds a
// `ClientConfig` from its profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use biadmin_api::transport::{TlsMode, TransportConfig};
use biadmin_api::PowerBiClient;

use crate::error::CoreError;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store.
    #[default]
    SystemDefaults,
    /// Additionally trust the CA certificate in this PEM file.
    CustomCa(PathBuf),
}

/// Everything needed to build an authenticated API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST root, e.g. `https://api.powerbi.com`.
    pub api_root: Url,
    /// Bearer access token, acquired out of band.
    pub token: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build the HTTP client. No request is made.
    pub fn connect(&self) -> Result<PowerBiClient, CoreError> {
        let transport = TransportConfig {
            tls: tls_to_transport(&self.tls),
            timeout: self.timeout,
        };
        Ok(PowerBiClient::from_token(
            self.api_root.as_str(),
            &self.token,
            &transport,
        )?)
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
    }
}
