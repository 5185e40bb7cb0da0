//! Error types and exit codes for trains
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed or inconsistent graph definition, missing graph)
//!
//! "No route" is never an error. Queries report it as `None` or an empty
//! collection and the CLI exits with success.

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::Label;

/// Exit codes for the trains binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building a graph or running the CLI
#[derive(Error, Debug)]
pub enum TrainsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph construction errors (exit code 3)
    #[error("the edge entry '{entry}' is incorrect (expected <from><to><weight>, e.g. AB5)")]
    MalformedEntry { entry: String },

    #[error("the edge {from}->{to} is duplicated")]
    DuplicateEdge { from: Label, to: Label },

    #[error("the edge {from}->{to} points at an unknown node")]
    UnresolvedTarget { from: Label, to: Label },

    #[error("the node '{label}' is defined more than once")]
    DuplicateNode { label: Label },

    #[error("no graph given (use --graph, --file, or a [graph] section in trains.toml)")]
    GraphSourceMissing,

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path:?}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route search interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl TrainsError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrainsError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        TrainsError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a file that could not be read
    pub fn read_failed(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        TrainsError::ReadFailed {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Whether this error comes from building a graph
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            TrainsError::MalformedEntry { .. }
                | TrainsError::DuplicateEdge { .. }
                | TrainsError::UnresolvedTarget { .. }
                | TrainsError::DuplicateNode { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrainsError::UnknownFormat(_)
            | TrainsError::UsageError(_)
            | TrainsError::InvalidValue { .. } => ExitCode::Usage,

            TrainsError::MalformedEntry { .. }
            | TrainsError::DuplicateEdge { .. }
            | TrainsError::UnresolvedTarget { .. }
            | TrainsError::DuplicateNode { .. }
            | TrainsError::GraphSourceMissing
            | TrainsError::NotFound { .. } => ExitCode::Data,

            TrainsError::Io(_)
            | TrainsError::ReadFailed { .. }
            | TrainsError::Toml(_)
            | TrainsError::Json(_)
            | TrainsError::Interrupted
            | TrainsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrainsError::UnknownFormat(_) => "unknown_format",
            TrainsError::UsageError(_) => "usage_error",
            TrainsError::InvalidValue { .. } => "invalid_value",
            TrainsError::MalformedEntry { .. } => "malformed_entry",
            TrainsError::DuplicateEdge { .. } => "duplicate_edge",
            TrainsError::UnresolvedTarget { .. } => "unresolved_target",
            TrainsError::DuplicateNode { .. } => "duplicate_node",
            TrainsError::GraphSourceMissing => "graph_source_missing",
            TrainsError::NotFound { .. } => "not_found",
            TrainsError::Io(_) => "io_error",
            TrainsError::ReadFailed { .. } => "read_failed",
            TrainsError::Toml(_) => "toml_error",
            TrainsError::Json(_) => "json_error",
            TrainsError::Interrupted => "interrupted",
            TrainsError::Other(_) => "other",
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

/// Result type alias for trains operations
pub type Result<T> = std::result::Result<T, TrainsError>;
