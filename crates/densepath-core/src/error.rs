//! Error types and exit codes for densepath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range input)
//! - 3: Data error (unreadable or malformed edge list)

use thiserror::Error;

/// Exit codes for the densepath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad edge list input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during densepath operations
#[derive(Error, Debug)]
pub enum DensepathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("node index out of range: {index} (graph has {count} nodes)")]
    NodeOutOfRange { index: usize, count: usize },

    #[error("edge endpoint out of encodable range: {value} (maximum {max})")]
    EndpointOutOfRange { value: usize, max: usize },

    // Data errors (exit code 3)
    #[error("invalid edge on line {line}: {reason}")]
    InvalidEdge { line: usize, reason: String },

    #[error("empty edge list")]
    EmptyEdgeList,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DensepathError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DensepathError::UnknownFormat(_)
            | DensepathError::UsageError(_)
            | DensepathError::NodeOutOfRange { .. }
            | DensepathError::EndpointOutOfRange { .. } => ExitCode::Usage,

            DensepathError::InvalidEdge { .. } | DensepathError::EmptyEdgeList => ExitCode::Data,

            DensepathError::Io(_) | DensepathError::Json(_) | DensepathError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            DensepathError::UnknownFormat(_) => "unknown_format",
            DensepathError::UsageError(_) => "usage_error",
            DensepathError::NodeOutOfRange { .. } => "node_out_of_range",
            DensepathError::EndpointOutOfRange { .. } => "endpoint_out_of_range",
            DensepathError::InvalidEdge { .. } => "invalid_edge",
            DensepathError::EmptyEdgeList => "empty_edge_list",
            DensepathError::Io(_) => "io_error",
            DensepathError::Json(_) => "json_error",
            DensepathError::Other(_) => "other",
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

/// Result type alias for densepath operations
pub type Result<T> = std::result::Result<T, DensepathError>;
