//! kgraph Loader
//!
//! Turns filtered connections into Cypher statements and writes them to the
//! graph store.
//!
//! # Architecture
//!
//! ```text
//! Connections → QueryBuilder → WorkQueue → L × worker → GraphStore
//! ```
//!
//! Every statement is a `MERGE` of both entities and the relation between
//! them, so loading the same connections twice leaves the graph unchanged.
//!
//! # Example Usage
//!
//! ```no_run
//! use kgraph_loader::{Credentials, GraphLoader, LoaderConfig, Neo4jStore, QueryBuilder};
//! use kgraph_domain::Connection;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), kgraph_loader::LoaderError> {
//! let config = LoaderConfig::default();
//! let credentials = Credentials::from_file(&config.credentials_file)?;
//! let store = Neo4jStore::connect(&config.url, &credentials, &config.connect_policy()).await?;
//!
//! let connections = vec![Connection::new("Alice", "Bob", "loves", 0.9, "f.txt")];
//! let statements = QueryBuilder::new().build_all(&connections);
//!
//! let report = GraphLoader::new(Arc::new(store), config).run(statements).await?;
//! println!("{} loaded", report.loaded);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod credentials;
mod error;
mod loader;
mod neo4j;
mod query;
mod recording;

pub use config::LoaderConfig;
pub use credentials::Credentials;
pub use error::LoaderError;
pub use loader::{GraphLoader, LoadReport};
pub use neo4j::Neo4jStore;
pub use query::QueryBuilder;
pub use recording::RecordingGraph;
