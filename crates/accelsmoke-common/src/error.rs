//! Error types shared across the workspace.

use crate::backend::Backend;
use thiserror::Error;

/// Errors from device placement and benchmark execution.
#[derive(Debug, Error)]
pub enum AccelError {
    /// The backend is not compiled into this build or cannot exist on this
    /// platform.
    #[error("backend '{backend}' is not supported in this build")]
    BackendUnsupported { backend: Backend },

    /// The backend is compiled in but its runtime was not found.
    #[error("backend '{backend}' is unavailable: {reason}")]
    BackendUnavailable { backend: Backend, reason: String },

    /// The tensor library rejected an operation.
    #[error("tensor operation failed: {0}")]
    Tensor(#[from] candle_core::Error),
}

pub type Result<T> = std::result::Result<T, AccelError>;
