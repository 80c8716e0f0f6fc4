//! Graph loader worker pool

use crate::{LoaderConfig, LoaderError};
use async_trait::async_trait;
use kgraph_domain::{GraphStore, Statement};
use kgraph_worker::{run_pool, Job, JobOutcome, PoolReport, WorkQueue};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Summary of one load phase
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Statements queued
    pub statements_total: usize,
    /// Statements committed
    pub loaded: usize,
    /// Statements that failed and were skipped
    pub failed: usize,
    /// Per-worker details
    pub pool: PoolReport,
}

/// Executes statements against a graph store with a small worker pool
///
/// A statement that fails is logged and skipped; it is not retried and does
/// not stop the worker.
pub struct GraphLoader<G>
where
    G: GraphStore,
{
    graph: Arc<G>,
    config: LoaderConfig,
}

impl<G> GraphLoader<G>
where
    G: GraphStore + 'static,
{
    /// Create a loader around a shared graph store
    pub fn new(graph: Arc<G>, config: LoaderConfig) -> Self {
        Self { graph, config }
    }

    /// Queue `statements` in order and run the workers until all have stopped
    pub async fn run(&self, statements: Vec<Statement>) -> Result<LoadReport, LoaderError> {
        self.config.validate().map_err(LoaderError::Config)?;

        let queue = WorkQueue::from_items(statements);
        let total = queue.total();
        let job = Arc::new(StatementJob {
            graph: Arc::clone(&self.graph),
        });

        let pool = run_pool("loader", queue, job, &self.config.pool_config()).await?;
        let report = LoadReport {
            statements_total: total,
            loaded: pool.processed(),
            failed: pool.failed(),
            pool,
        };
        info!(
            "Loaded {} of {} statements, {} failed",
            report.loaded, total, report.failed
        );
        Ok(report)
    }
}

struct StatementJob<G> {
    graph: Arc<G>,
}

#[async_trait]
impl<G> Job<Statement> for StatementJob<G>
where
    G: GraphStore + 'static,
{
    async fn run(&self, statement: Statement) -> JobOutcome {
        match self.graph.execute(&statement).await {
            Ok(()) => {
                debug!("Loaded statement {}", statement);
                JobOutcome::Done
            }
            Err(e) => {
                error!("Failed to load statement {}: {}", statement, e);
                JobOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingGraph;

    fn statements(n: usize) -> Vec<Statement> {
        (0..n).map(|i| Statement::new(format!("RETURN {};", i))).collect()
    }

    #[tokio::test]
    async fn test_single_worker_loads_in_order() {
        let graph = RecordingGraph::new();
        let loader = GraphLoader::new(Arc::new(graph.clone()), LoaderConfig::default());

        let report = loader.run(statements(5)).await.unwrap();

        assert_eq!(report.loaded, 5);
        assert_eq!(report.failed, 0);
        assert_eq!(graph.statements(), statements(5));
    }

    #[tokio::test]
    async fn test_failed_statement_is_skipped() {
        let graph = RecordingGraph::rejecting("RETURN 2;");
        let loader = GraphLoader::new(Arc::new(graph.clone()), LoaderConfig::default());

        let report = loader.run(statements(4)).await.unwrap();

        assert_eq!(report.statements_total, 4);
        assert_eq!(report.loaded, 3);
        assert_eq!(report.failed, 1);
        assert_eq!(graph.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_many_workers_load_everything_once() {
        let graph = RecordingGraph::new();
        let config = LoaderConfig {
            workers: 4,
            ..Default::default()
        };
        let loader = GraphLoader::new(Arc::new(graph.clone()), config);

        let report = loader.run(statements(40)).await.unwrap();

        assert_eq!(report.loaded, 40);
        assert_eq!(report.pool.workers.len(), 4);
        let mut seen: Vec<String> = graph.statements().into_iter().map(Statement::into_inner).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 40);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let graph = RecordingGraph::new();
        let loader = GraphLoader::new(Arc::new(graph.clone()), LoaderConfig::default());

        let report = loader.run(Vec::new()).await.unwrap();
        assert_eq!(report.loaded, 0);
        assert!(graph.is_empty());
    }

    #[tokio::test]
    async fn test_zero_workers_rejected() {
        let config = LoaderConfig {
            workers: 0,
            ..Default::default()
        };
        let loader = GraphLoader::new(Arc::new(RecordingGraph::new()), config);
        assert!(matches!(loader.run(statements(1)).await, Err(LoaderError::Config(_))));
    }
}
