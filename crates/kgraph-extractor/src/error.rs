//! Error types for the Extractor

use kgraph_worker::WorkerError;
use thiserror::Error;

/// Errors that abort the extraction phase
///
/// Per-sentence service faults never surface here; they are retried and,
/// failing that, dropped.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker pool failure
    #[error("Worker pool error: {0}")]
    Worker(#[from] WorkerError),
}
