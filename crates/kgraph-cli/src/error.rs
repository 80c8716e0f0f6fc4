//! Error types for the pipeline binary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that end the run.
///
/// Per-sentence and per-statement failures never reach this type; they are
/// logged and counted instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input directory missing or not a directory
    #[error("Input directory {0} is not accessible")]
    DataDir(PathBuf),

    /// A checkpoint the command needs does not exist
    #[error("Checkpoint {0} not found; run 'kgraph extract' first")]
    MissingCheckpoint(PathBuf),

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    ConfigIo {
        /// Configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading or segmenting documents failed
    #[error("Document error: {0}")]
    Segment(#[from] kgraph_segmenter::SegmentError),

    /// Extraction client could not be built
    #[error("Extraction client error: {0}")]
    Client(#[from] kgraph_openie::ExtractError),

    /// Checkpoint or cache directory error
    #[error("Storage error: {0}")]
    Store(#[from] kgraph_store::StoreError),

    /// Extraction phase error
    #[error("Extraction error: {0}")]
    Extractor(#[from] kgraph_extractor::ExtractorError),

    /// Credentials, connection or load phase error
    #[error("Loader error: {0}")]
    Loader(#[from] kgraph_loader::LoaderError),
}
