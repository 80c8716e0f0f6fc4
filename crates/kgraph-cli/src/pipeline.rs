//! The pipeline context and its phases.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::metrics::PipelineMetrics;
use kgraph_domain::{Document, GraphStore, RelationExtractor, Segmenter, Statement};
use kgraph_extractor::ExtractionPool;
use kgraph_filter::ConnectionFilter;
use kgraph_loader::{GraphLoader, LoadReport, QueryBuilder};
use kgraph_segmenter::DocumentLoader;
use kgraph_store::{Checkpoints, ConnectionStore};
use std::sync::Arc;
use tracing::info;

/// Everything one run needs, built once at startup.
///
/// Opening the context creates the cache directory and seeds the store from
/// the primary checkpoint when one exists. Phases run in order through
/// `&mut self`; each returns only after all of its workers have stopped.
pub struct PipelineContext<S, E>
where
    S: Segmenter,
    E: RelationExtractor,
{
    config: PipelineConfig,
    documents: DocumentLoader<S>,
    extractor: Arc<E>,
    checkpoints: Checkpoints,
    store: ConnectionStore,
    metrics: PipelineMetrics,
}

impl<S, E> PipelineContext<S, E>
where
    S: Segmenter,
    E: RelationExtractor + 'static,
{
    /// Validate `config`, open the cache directory and seed the store.
    pub fn new(config: PipelineConfig, segmenter: S, extractor: Arc<E>) -> Result<Self> {
        config.validate()?;

        let data_dir = &config.input.data_dir;
        if !data_dir.is_dir() {
            return Err(PipelineError::DataDir(data_dir.clone()));
        }

        let checkpoints = Checkpoints::open(
            config.input.cache_path(),
            &config.input.connections_file,
            &config.input.filtered_connections_file,
        )?;
        let store = ConnectionStore::from_checkpoint(checkpoints.primary())?;

        Ok(Self {
            config,
            documents: DocumentLoader::new(segmenter),
            extractor,
            checkpoints,
            store,
            metrics: PipelineMetrics::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The connection store.
    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// Checkpoint locations.
    pub fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    /// Counters collected so far.
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Extract and filter, writing both checkpoints.
    ///
    /// A store seeded from a checkpoint skips extraction and filtering. An
    /// existing filtered checkpoint is then left as it is; a missing one is
    /// written from the store as loaded.
    pub async fn extract(&mut self) -> Result<()> {
        if self.store.is_seeded() {
            info!("Skipping extraction, store populated from checkpoint");
            self.metrics.record_checkpoint(self.store.len());

            let filtered = self.checkpoints.filtered();
            if filtered.exists() {
                info!("Keeping filtered checkpoint {}", filtered.path().display());
            } else {
                self.store.persist(filtered)?;
            }
            return Ok(());
        }

        let documents: Vec<Arc<Document>> = self
            .documents
            .load_dir(&self.config.input.data_dir)?
            .into_iter()
            .map(Arc::new)
            .collect();

        let pool = ExtractionPool::new(Arc::clone(&self.extractor), self.config.extraction.clone());
        let report = pool.run(&documents, &self.store).await?;
        info!("{}", report.summary());
        self.metrics.record_extraction(documents.len(), &report);

        self.store.persist(self.checkpoints.primary())?;

        let filter = ConnectionFilter::for_segmenter(self.documents.segmenter());
        let filtered = filter.apply_to_store(&self.store);
        self.metrics.record_filter(&filtered);

        self.store.persist(self.checkpoints.filtered())?;
        Ok(())
    }

    /// Replace the store with the filtered checkpoint.
    pub fn use_filtered_checkpoint(&mut self) -> Result<()> {
        let checkpoint = self.checkpoints.filtered();
        if !checkpoint.exists() {
            return Err(PipelineError::MissingCheckpoint(checkpoint.path().to_path_buf()));
        }

        let connections = checkpoint.read()?;
        info!(
            "Loaded {} filtered connections from {}",
            connections.len(),
            checkpoint.path().display()
        );
        self.metrics.record_checkpoint(connections.len());
        self.store = ConnectionStore::with_connections(connections, true);
        Ok(())
    }

    /// One statement per stored connection, in store order.
    pub fn statements(&mut self) -> Vec<Statement> {
        let statements = QueryBuilder::new().build_all(&self.store.snapshot());
        info!("Built {} statements", statements.len());
        self.metrics.record_statements(statements.len());
        statements
    }

    /// Build statements and load them into `graph`.
    pub async fn load<G>(&mut self, graph: Arc<G>) -> Result<LoadReport>
    where
        G: GraphStore + 'static,
    {
        let statements = self.statements();
        let loader = GraphLoader::new(graph, self.config.graph.clone());
        let report = loader.run(statements).await?;
        self.metrics.record_load(&report);
        Ok(report)
    }
}
