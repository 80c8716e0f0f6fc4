//! Extraction worker pool

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::ExtractionReport;
use async_trait::async_trait;
use kgraph_domain::{Connection, Document, PendingSentence, RelationExtractor};
use kgraph_store::ConnectionStore;
use kgraph_worker::{run_pool, Job, JobOutcome, RetryPolicy, WorkQueue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Runs the extraction phase over a set of documents
pub struct ExtractionPool<E>
where
    E: RelationExtractor,
{
    extractor: Arc<E>,
    config: ExtractorConfig,
}

impl<E> ExtractionPool<E>
where
    E: RelationExtractor + 'static,
{
    /// Create a pool around a shared extractor
    pub fn new(extractor: Arc<E>, config: ExtractorConfig) -> Self {
        Self { extractor, config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Queue every sentence, run the workers and wait for all of them
    ///
    /// Connections are appended to `store` as each sentence completes, so
    /// their order across sentences is nondeterministic when more than one
    /// worker runs. Sentences that exhaust their attempts are dropped.
    pub async fn run(
        &self,
        documents: &[Arc<Document>],
        store: &ConnectionStore,
    ) -> Result<ExtractionReport, ExtractorError> {
        self.config.validate().map_err(ExtractorError::Config)?;

        let queue = WorkQueue::from_items(PendingSentence::from_documents(documents));
        let total = queue.total();
        info!("Queued {} sentences from {} documents", total, documents.len());

        let job = Arc::new(SentenceJob {
            extractor: Arc::clone(&self.extractor),
            store: store.clone(),
            retry: self.config.retry_policy(),
            connections: AtomicUsize::new(0),
        });

        let pool = run_pool("extraction", queue, Arc::clone(&job), &self.config.pool_config()).await?;

        let report = ExtractionReport {
            sentences_total: total,
            sentences_processed: pool.processed(),
            sentences_dropped: pool.failed(),
            connections_extracted: job.connections.load(Ordering::SeqCst),
            pool,
        };
        info!("{} of {} sentences processed", report.sentences_processed, total);
        Ok(report)
    }
}

struct SentenceJob<E> {
    extractor: Arc<E>,
    store: ConnectionStore,
    retry: RetryPolicy,
    connections: AtomicUsize,
}

#[async_trait]
impl<E> Job<PendingSentence> for SentenceJob<E>
where
    E: RelationExtractor + 'static,
{
    async fn run(&self, item: PendingSentence) -> JobOutcome {
        let extractor = &self.extractor;
        let sentence = item.sentence.as_str();

        let records = match self.retry.run(|_| extractor.extract(sentence)).await {
            Ok(records) => records,
            Err(e) => {
                error!(
                    "skipping item, could not process sentence from {} ({}): {}",
                    item.document.file_name(),
                    e,
                    sentence
                );
                return JobOutcome::Failed;
            }
        };

        let connections: Vec<Connection> = records
            .iter()
            .filter_map(|record| Connection::from_record(record, &item.document))
            .collect();
        debug!(
            "{} records, {} connections for sentence: {}",
            records.len(),
            connections.len(),
            sentence
        );

        self.connections.fetch_add(connections.len(), Ordering::SeqCst);
        self.store.extend(connections);
        JobOutcome::Done
    }
}
