//! Trait definitions for external collaborators
//!
//! These traits are the only way the pipeline reaches the segmenter, the
//! extraction service and the graph engine. Implementations live in other
//! crates (kgraph-segmenter, kgraph-openie, kgraph-loader).

use crate::{ExtractionRecord, Statement};
use async_trait::async_trait;
use std::collections::HashSet;

/// Splits raw text into sentences and knows the stop words of its language
///
/// Implemented by the segmentation layer (kgraph-segmenter)
pub trait Segmenter: Send + Sync {
    /// Ordered sentence substrings of `text`
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Lower-cased stop words for the active language
    fn stop_words(&self) -> &HashSet<String>;
}

/// Remote relation extraction for a single sentence
///
/// Implemented by the extraction client layer (kgraph-openie). Callers must
/// assume the service is slow, can fail, and can return nothing.
#[async_trait]
pub trait RelationExtractor: Send + Sync {
    /// Error type for extraction calls
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extract zero or more relation records from `sentence`
    async fn extract(&self, sentence: &str) -> Result<Vec<ExtractionRecord>, Self::Error>;
}

/// Write-only access to the graph store
///
/// Implemented by the loader layer (kgraph-loader). Each call runs in its own
/// write transaction.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Error type for graph writes
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute one statement in an independent write transaction
    async fn execute(&self, statement: &Statement) -> Result<(), Self::Error>;
}
