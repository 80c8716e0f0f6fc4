//! Error types for the loader

use kgraph_worker::WorkerError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading statements into the graph store
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Credentials file could not be read
    #[error("Failed to read credentials file {path}: {source}")]
    CredentialsIo {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Credentials file is not two non-empty lines
    #[error("Malformed credentials file {path}: {reason}")]
    CredentialsFormat {
        /// File that was read
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Could not open a connection to the graph store
    #[error("Failed to connect to {url} after {attempts} attempts: {reason}")]
    Connect {
        /// Graph store URL
        url: String,
        /// Attempts made
        attempts: u32,
        /// Last driver error
        reason: String,
    },

    /// Driver error while executing a statement
    #[error("Graph error: {0}")]
    Graph(#[from] neo4rs::Error),

    /// Statement refused by an in-memory graph
    #[error("Statement rejected: {0}")]
    Rejected(String),

    /// Worker pool failure
    #[error("Worker pool error: {0}")]
    Worker(#[from] WorkerError),
}
