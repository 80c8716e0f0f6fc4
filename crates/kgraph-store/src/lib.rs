//! kgraph Storage Layer
//!
//! Holds the ordered collection of extracted connections and snapshots it to
//! disk.
//!
//! # Architecture
//!
//! - [`ConnectionStore`]: insertion-ordered, append-safe under concurrent workers
//! - [`Checkpoint`]: one header-less CSV file, one row per connection
//! - [`Checkpoints`]: the cache directory with its primary and filtered files
//!
//! A primary checkpoint present at startup seeds the store verbatim and the
//! extraction phase is skipped for that run.
//!
//! # Examples
//!
//! ```no_run
//! use kgraph_store::{Checkpoints, ConnectionStore};
//!
//! # fn example() -> Result<(), kgraph_store::StoreError> {
//! let checkpoints = Checkpoints::open("data/cache", "entity_connections.cache", "entity_connections_filtered.cache")?;
//! let store = ConnectionStore::from_checkpoint(checkpoints.primary())?;
//! if store.is_seeded() {
//!     println!("{} connections from cache", store.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod checkpoint;
mod store;

use std::path::PathBuf;
use thiserror::Error;

pub use checkpoint::{Checkpoint, Checkpoints};
pub use store::ConnectionStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error on a checkpoint or the cache directory
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed checkpoint row or CSV write failure
    #[error("Checkpoint format error in {path}: {source}")]
    Csv {
        /// Checkpoint path
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },
}
