//! kgraph Extraction Client Layer
//!
//! Implementations of the `RelationExtractor` trait from `kgraph-domain`.
//!
//! # Extractors
//!
//! - `OpenIeClient`: HTTP client for an OpenIE 5 style service
//! - `MockExtractor`: Deterministic, scriptable stand-in for tests
//!
//! # Examples
//!
//! ```
//! use kgraph_openie::MockExtractor;
//! use kgraph_domain::{ExtractionRecord, RelationExtractor};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut extractor = MockExtractor::default();
//! extractor.add_response("Alice met Bob.", vec![ExtractionRecord {
//!     subject: "Alice".into(),
//!     relation: "met".into(),
//!     objects: vec!["Bob".into()],
//!     confidence: 0.9,
//! }]);
//!
//! let records = extractor.extract("Alice met Bob.").await.unwrap();
//! assert_eq!(records.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod mock;
mod wire;

use thiserror::Error;

pub use client::OpenIeClient;
pub use mock::MockExtractor;
pub use wire::parse_response;

/// Errors that can occur while calling the extraction service
///
/// Callers retry every variant the same way; the split exists for logs.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Response body did not match the extraction record shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Scripted failure from `MockExtractor`
    #[error("Mock failure: {0}")]
    Mock(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        ExtractError::Communication(e.to_string())
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(e: serde_json::Error) -> Self {
        ExtractError::InvalidResponse(e.to_string())
    }
}
