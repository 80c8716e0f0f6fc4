//! Run-level counters

use kgraph_extractor::ExtractionReport;
use kgraph_filter::FilterReport;
use kgraph_loader::LoadReport;

/// Counters collected across the phases of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineMetrics {
    /// Documents read
    pub documents: usize,
    /// Sentences queued for extraction
    pub sentences: usize,
    /// Sentences the service answered
    pub sentences_processed: usize,
    /// Sentences dropped after exhausting retries
    pub sentences_dropped: usize,
    /// Connections appended during extraction
    pub connections_extracted: usize,
    /// Connections taken from a checkpoint instead
    pub connections_from_checkpoint: usize,
    /// Duplicates removed by the filter
    pub duplicates_removed: usize,
    /// Stop-word subjects removed by the filter
    pub stop_words_removed: usize,
    /// Statements built
    pub statements_built: usize,
    /// Statements committed
    pub statements_loaded: usize,
    /// Statements that failed
    pub statements_failed: usize,
}

impl PipelineMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the extraction phase
    pub fn record_extraction(&mut self, documents: usize, report: &ExtractionReport) {
        self.documents += documents;
        self.sentences += report.sentences_total;
        self.sentences_processed += report.sentences_processed;
        self.sentences_dropped += report.sentences_dropped;
        self.connections_extracted += report.connections_extracted;
    }

    /// Record a store seeded from a checkpoint
    pub fn record_checkpoint(&mut self, connections: usize) {
        self.connections_from_checkpoint += connections;
    }

    /// Record the filter passes
    pub fn record_filter(&mut self, report: &FilterReport) {
        self.duplicates_removed += report.duplicates_removed;
        self.stop_words_removed += report.stop_words_removed;
    }

    /// Record built statements
    pub fn record_statements(&mut self, count: usize) {
        self.statements_built += count;
    }

    /// Record the load phase
    pub fn record_load(&mut self, report: &LoadReport) {
        self.statements_loaded += report.loaded;
        self.statements_failed += report.failed;
    }

    /// Total connections removed by filtering
    pub fn total_filtered(&self) -> usize {
        self.duplicates_removed + self.stop_words_removed
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Pipeline Summary".to_string(),
            "================".to_string(),
        ];

        if self.connections_from_checkpoint > 0 {
            lines.push(format!(
                "Connections from checkpoint: {}",
                self.connections_from_checkpoint
            ));
        } else {
            lines.push(format!("Documents: {}", self.documents));
            lines.push(format!(
                "Sentences: {} processed, {} dropped, {} total",
                self.sentences_processed, self.sentences_dropped, self.sentences
            ));
            lines.push(format!("Connections extracted: {}", self.connections_extracted));
        }

        lines.push(format!(
            "Filtered: {} duplicates, {} stop words ({} total)",
            self.duplicates_removed,
            self.stop_words_removed,
            self.total_filtered()
        ));
        lines.push(format!(
            "Statements: {} built, {} loaded, {} failed",
            self.statements_built, self.statements_loaded, self.statements_failed
        ));

        lines.join("\n")
    }
}
