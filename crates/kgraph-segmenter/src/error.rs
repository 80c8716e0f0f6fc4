//! Error types for document loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading documents
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The input directory could not be listed
    #[error("Cannot read input directory {path}: {source}")]
    ReadDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A document could not be read (missing, unreadable, or not UTF-8)
    #[error("Cannot read document {path}: {source}")]
    ReadFile {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
