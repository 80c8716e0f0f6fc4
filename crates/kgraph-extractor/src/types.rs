//! Result types for extraction

use kgraph_worker::PoolReport;

/// Summary of one extraction phase
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Sentences queued
    pub sentences_total: usize,

    /// Sentences the service answered
    pub sentences_processed: usize,

    /// Sentences dropped after exhausting retries
    pub sentences_dropped: usize,

    /// Connections appended to the store
    pub connections_extracted: usize,

    /// Per-worker details
    pub pool: PoolReport,
}

impl ExtractionReport {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} of {} sentences processed, {} dropped, {} connections extracted",
            self.sentences_processed,
            self.sentences_total,
            self.sentences_dropped,
            self.connections_extracted
        )
    }
}
