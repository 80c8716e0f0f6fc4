//! kgraph Extractor
//!
//! Turns sentences into connections through the remote extraction service.
//!
//! # Overview
//!
//! Every sentence of every document is queued, in document order then
//! sentence order, before the workers start. Each worker takes one sentence
//! at a time, calls the service with bounded retry, and appends the resulting
//! connections to the shared [`ConnectionStore`].
//!
//! # Architecture
//!
//! ```text
//! Documents → WorkQueue → N × worker → RelationExtractor → ConnectionStore
//! ```
//!
//! # Key Features
//!
//! - **Bounded retry**: fixed delay between attempts, every fault retried alike
//! - **Drop, don't fail**: a sentence that exhausts its attempts is logged and skipped
//! - **First object only**: records with several objects keep the first one
//!
//! # Example Usage
//!
//! ```no_run
//! use kgraph_extractor::{ExtractionPool, ExtractorConfig};
//! use kgraph_openie::OpenIeClient;
//! use kgraph_store::ConnectionStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let client = OpenIeClient::new(&config.service_url)?;
//! let pool = ExtractionPool::new(Arc::new(client), config);
//!
//! let store = ConnectionStore::new();
//! let report = pool.run(&[], &store).await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! [`ConnectionStore`]: kgraph_store::ConnectionStore

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::ExtractionPool;
pub use types::ExtractionReport;
