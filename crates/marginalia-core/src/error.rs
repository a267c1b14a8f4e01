//! Error types and exit codes for marginalia
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, empty tag query)
//! - 3: Data error (no annotation at the requested position, stale marker)

mod macros;

use thiserror::Error;

/// Exit codes for the marginalia CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - document does not hold what the caller asked for (3)
    Data = 3,
}

/// Errors that can occur during marginalia operations
#[derive(Error, Debug)]
pub enum MarginaliaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("hashtag query needs at least one tag")]
    EmptyTagQuery,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no annotation link at offset {offset}")]
    NotAnAnnotation { offset: usize },

    #[error("marker {id} no longer points into the document")]
    MarkerNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl MarginaliaError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MarginaliaError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MarginaliaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MarginaliaError::UnknownFormat(_)
            | MarginaliaError::UsageError(_)
            | MarginaliaError::EmptyTagQuery
            | MarginaliaError::InvalidValue { .. } => ExitCode::Usage,

            MarginaliaError::NotAnAnnotation { .. } | MarginaliaError::MarkerNotFound { .. } => {
                ExitCode::Data
            }

            MarginaliaError::Io(_)
            | MarginaliaError::Json(_)
            | MarginaliaError::Toml(_)
            | MarginaliaError::FailedOperationWithTarget { .. }
            | MarginaliaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MarginaliaError::UnknownFormat(_) => "unknown_format",
            MarginaliaError::UsageError(_) => "usage_error",
            MarginaliaError::EmptyTagQuery => "empty_tag_query",
            MarginaliaError::InvalidValue { .. } => "invalid_value",
            MarginaliaError::NotAnAnnotation { .. } => "not_an_annotation",
            MarginaliaError::MarkerNotFound { .. } => "marker_not_found",
            MarginaliaError::Io(_) => "io_error",
            MarginaliaError::Json(_) => "json_error",
            MarginaliaError::Toml(_) => "toml_error",
            MarginaliaError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MarginaliaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for marginalia operations
pub type Result<T> = std::result::Result<T, MarginaliaError>;
