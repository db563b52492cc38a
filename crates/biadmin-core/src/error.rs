// ── Core error types ──
//
// User-facing errors from biadmin-core. Consumers never see raw HTTP
// status codes or JSON parse failures; the `From<biadmin_api::Error>`
// impl translates transport-layer errors into the domain taxonomy.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation (never reaches the network) ───────────────────────
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    // ── Session ──────────────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Remote service ───────────────────────────────────────────────
    #[error("{resource} not found: {identifier}")]
    NotFound {
        resource: String,
        identifier: String,
    },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Service temporarily unavailable: {message}")]
    Transient {
        kind: TransientKind,
        message: String,
        /// Seconds the service asked us to wait, when it said so.
        retry_after_secs: Option<u64>,
    },

    #[error("Remote service error: {message}")]
    Remote {
        message: String,
        /// Service error code (e.g., "PowerBINotAuthorizedException").
        code: Option<String>,
        status: Option<u16>,
    },

    // ── Data ─────────────────────────────────────────────────────────
    #[error("Malformed {field} in response: {message}")]
    Format { field: String, message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Why a retryable failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientKind {
    /// No response within the client timeout.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// HTTP 429.
    Throttled,
    /// HTTP 5xx.
    Server,
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }

    /// Name the missing resource on a not-found error. Other errors pass
    /// through unchanged.
    pub(crate) fn not_found_as(self, resource: &str, identifier: impl Into<String>) -> Self {
        match self {
            Self::NotFound { .. } => Self::NotFound {
                resource: resource.to_owned(),
                identifier: identifier.into(),
            },
            other => other,
        }
    }

    /// Returns `true` for errors raised before any remote call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<biadmin_api::Error> for CoreError {
    fn from(err: biadmin_api::Error) -> Self {
        use biadmin_api::Error as Api;

        match err {
            Api::Authentication { status, message } => CoreError::Authentication {
                message: format!("{message} (HTTP {status})"),
            },
            Api::InvalidToken { message } => CoreError::Authentication { message },
            Api::Transport(e) => {
                let kind = if e.is_timeout() {
                    Some(TransientKind::Timeout)
                } else if e.is_connect() {
                    Some(TransientKind::Connect)
                } else {
                    None
                };
                match kind {
                    Some(kind) => CoreError::Transient {
                        kind,
                        message: e.to_string(),
                        retry_after_secs: None,
                    },
                    None => CoreError::Remote {
                        message: e.to_string(),
                        code: None,
                        status: None,
                    },
                }
            }
            Api::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            Api::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            Api::RateLimited { retry_after_secs } => CoreError::Transient {
                kind: TransientKind::Throttled,
                message: "rate limited by the service".into(),
                retry_after_secs: Some(retry_after_secs),
            },
            Api::Api {
                status: 404,
                message,
                ..
            } => CoreError::NotFound {
                resource: "resource".into(),
                identifier: message,
            },
            Api::Api {
                status: 409,
                message,
                ..
            } => CoreError::Conflict { message },
            Api::Api {
                status,
                message,
                code,
            } if status >= 500 => CoreError::Transient {
                kind: TransientKind::Server,
                message: match code {
                    Some(code) => format!("{message} ({code}, HTTP {status})"),
                    None => format!("{message} (HTTP {status})"),
                },
                retry_after_secs: None,
            },
            Api::Api {
                status,
                message,
                code,
            } => CoreError::Remote {
                message,
                code,
                status: Some(status),
            },
            Api::Deserialization { message, body: _ } => CoreError::Format {
                field: "body".into(),
                message,
            },
        }
    }
}
