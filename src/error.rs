//! Error types for pxf-cluster
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ExecutorError;
use crate::domain::value_objects::{EnvVar, Operation};

/// Result type alias for pxf-cluster operations
pub type PxfResult<T> = Result<T, PxfError>;

/// Main error type for pxf-cluster operations
#[derive(Error, Debug)]
pub enum PxfError {
    /// A required environment variable is not set
    #[error("{var} must be set")]
    MissingVariable { var: EnvVar },

    /// A required environment variable is set to the empty string
    #[error("{var} cannot be blank")]
    BlankVariable { var: EnvVar },

    /// Two directories that must differ resolved to the same path
    #[error("{message}")]
    ConfigurationConflict { message: String },

    /// The user declined the confirmation prompt
    #[error("operation `{operation}` cancelled")]
    Cancelled { operation: Operation },

    /// One or more hosts reported a failure
    #[error("pxf {operation} failed on {failed} out of {total} host(s)")]
    ExecutionFailed {
        operation: Operation,
        failed: usize,
        total: usize,
    },

    /// The cluster executor could not run at all
    #[error(transparent)]
    Executor(#[from] ExecutorError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PxfError {
    /// The environment variable this error is about, if any
    pub fn variable(&self) -> Option<EnvVar> {
        match self {
            PxfError::MissingVariable { var } | PxfError::BlankVariable { var } => Some(*var),
            _ => None,
        }
    }
}
