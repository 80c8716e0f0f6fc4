//! Error types for worker pools

use thiserror::Error;

/// Errors that can occur while running a worker pool
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Pool configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// A worker task panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for WorkerError {
    fn from(e: tokio::task::JoinError) -> Self {
        WorkerError::Join(e.to_string())
    }
}
