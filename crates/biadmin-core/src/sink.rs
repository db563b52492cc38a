// ── Output sink ──
//
// Commands never print. They push result objects and error records into
// an `OutputSink`, in emission order. The CLI renders them; tests read
// them back from a `MemorySink`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::error::CoreError;

/// Broad class of a failure, mirroring how a shell host groups errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum ErrorCategory {
    InvalidArgument,
    AuthenticationError,
    ObjectNotFound,
    ResourceExists,
    ConnectionError,
    InvalidData,
    NotSpecified,
}

/// A single failure reported by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// `<Command>.<Kind>`, e.g. `GetActivityEvents.ValidationFailed`.
    pub error_id: String,
    pub category: ErrorCategory,
    pub message: String,
    /// The parameter or resource the error is about, when known.
    pub target: Option<String>,
}

impl ErrorRecord {
    pub fn from_error(command: &str, err: &CoreError) -> Self {
        let (kind, category, target) = match err {
            CoreError::Validation { field, .. } => (
                "ValidationFailed",
                ErrorCategory::InvalidArgument,
                Some(field.clone()),
            ),
            CoreError::Authentication { .. } => (
                "AuthenticationFailed",
                ErrorCategory::AuthenticationError,
                None,
            ),
            CoreError::NotFound { identifier, .. } => (
                "NotFound",
                ErrorCategory::ObjectNotFound,
                Some(identifier.clone()),
            ),
            CoreError::Conflict { .. } => ("Conflict", ErrorCategory::ResourceExists, None),
            CoreError::Transient { .. } => {
                ("TransientFailure", ErrorCategory::ConnectionError, None)
            }
            CoreError::Remote { .. } => ("RemoteServiceError", ErrorCategory::NotSpecified, None),
            CoreError::Format { field, .. } => {
                ("FormatError", ErrorCategory::InvalidData, Some(field.clone()))
            }
            CoreError::Config { .. } => ("ConfigError", ErrorCategory::InvalidArgument, None),
        };
        Self {
            error_id: format!("{command}.{kind}"),
            category,
            message: err.to_string(),
            target,
        }
    }
}

/// Append-only destination for command results.
pub trait OutputSink<T> {
    /// Emit one result object. Called as soon as the object is available.
    fn write_object(&mut self, item: T);

    /// Record one failure.
    fn write_error(&mut self, record: ErrorRecord);
}

/// Sink that keeps everything in memory.
#[derive(Debug, Clone)]
pub struct MemorySink<T> {
    pub output: Vec<T>,
    pub errors: Vec<ErrorRecord>,
}

impl<T> Default for MemorySink<T> {
    fn default() -> Self {
        Self {
            output: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> MemorySink<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<T> OutputSink<T> for MemorySink<T> {
    fn write_object(&mut self, item: T) {
        self.output.push(item);
    }

    fn write_error(&mut self, record: ErrorRecord) {
        self.errors.push(record);
    }
}
