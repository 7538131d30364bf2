//! Error types and exit codes for docsim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration)
//! - 3: Data error (unreadable input, unknown document)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the docsim binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args/config (2)
    Usage = 2,
    /// Data error - malformed input, unknown document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during docsim operations
#[derive(Error, Debug)]
pub enum DocsimError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("neighbor/label count mismatch: {neighbors} neighbors but {labels} labels")]
    LengthMismatch { neighbors: usize, labels: usize },

    // Data errors (exit code 3)
    #[error("document not found: {id}")]
    DocumentNotFound { id: String },

    #[error("document {id} has no term statistics for field {field}")]
    FieldNotFound { field: String, id: String },

    #[error("invalid input in {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl DocsimError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        DocsimError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DocsimError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        DocsimError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DocsimError::UnknownFormat(_)
            | DocsimError::UsageError(_)
            | DocsimError::InvalidValue { .. }
            | DocsimError::Unsupported { .. }
            | DocsimError::LengthMismatch { .. } => ExitCode::Usage,

            DocsimError::DocumentNotFound { .. }
            | DocsimError::FieldNotFound { .. }
            | DocsimError::InvalidInput { .. } => ExitCode::Data,

            DocsimError::Io(_)
            | DocsimError::Json(_)
            | DocsimError::Toml(_)
            | DocsimError::Regex(_)
            | DocsimError::FailedOperation { .. }
            | DocsimError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DocsimError::UnknownFormat(_) => "unknown_format",
            DocsimError::UsageError(_) => "usage_error",
            DocsimError::InvalidValue { .. } => "invalid_value",
            DocsimError::Unsupported { .. } => "unsupported",
            DocsimError::LengthMismatch { .. } => "length_mismatch",
            DocsimError::DocumentNotFound { .. } => "document_not_found",
            DocsimError::FieldNotFound { .. } => "field_not_found",
            DocsimError::InvalidInput { .. } => "invalid_input",
            DocsimError::Io(_) => "io_error",
            DocsimError::Json(_) => "json_error",
            DocsimError::Toml(_) => "toml_error",
            DocsimError::Regex(_) => "regex_error",
            DocsimError::FailedOperation { .. } => "failed_operation",
            DocsimError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for docsim operations
pub type Result<T> = std::result::Result<T, DocsimError>;
