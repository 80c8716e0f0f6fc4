//! Fixed-size worker pools draining a shared queue

use crate::queue::{Next, WorkQueue};
use crate::WorkerError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Outcome of one job run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Item handled
    Done,
    /// Item given up on; the worker moves to the next one
    Failed,
}

/// Work performed on each queued item
#[async_trait]
pub trait Job<T>: Send + Sync + 'static {
    /// Handle one item
    async fn run(&self, item: T) -> JobOutcome;
}

/// Pool sizing and receive discipline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of concurrent workers
    pub workers: usize,

    /// Longest a worker waits on an empty, still-open queue
    pub queue_wait_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            queue_wait_timeout: Duration::from_secs(5),
        }
    }
}

/// Why a worker stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// The queue was closed and empty
    Drained,
    /// The idle guard fired
    IdleTimeout,
}

/// What one worker did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    /// Worker identifier used in logs
    pub worker_id: Uuid,
    /// Items handled successfully
    pub processed: usize,
    /// Items given up on
    pub failed: usize,
    /// Why the worker stopped
    pub exit: WorkerExit,
}

/// What a whole pool did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Items in the queue when the pool started
    pub total: usize,
    /// One report per worker
    pub workers: Vec<WorkerReport>,
}

impl PoolReport {
    /// Sum of items handled across workers
    pub fn processed(&self) -> usize {
        self.workers.iter().map(|w| w.processed).sum()
    }

    /// Sum of items given up on across workers
    pub fn failed(&self) -> usize {
        self.workers.iter().map(|w| w.failed).sum()
    }
}

/// Run `config.workers` workers over `queue` until every one has stopped
///
/// Returning is the barrier: no worker of this pool is still running.
pub async fn run_pool<T, J>(
    name: &str,
    queue: WorkQueue<T>,
    job: Arc<J>,
    config: &PoolConfig,
) -> Result<PoolReport, WorkerError>
where
    T: Send + 'static,
    J: Job<T>,
{
    if config.workers == 0 {
        return Err(WorkerError::Config(format!("{} pool needs at least one worker", name)));
    }

    let total = queue.total();
    info!("Starting {} pool: {} workers, {} items", name, config.workers, total);

    let mut handles = Vec::with_capacity(config.workers);
    for _ in 0..config.workers {
        let worker_id = Uuid::now_v7();
        let span = info_span!("worker", pool = %name, id = %worker_id);
        let worker = work(worker_id, queue.clone(), Arc::clone(&job), config.queue_wait_timeout);
        handles.push(tokio::spawn(worker.instrument(span)));
    }

    let mut workers = Vec::with_capacity(handles.len());
    for handle in handles {
        let report = handle.await?;
        debug!("Worker result {:?}", report);
        workers.push(report);
    }

    let report = PoolReport { total, workers };
    info!(
        "{} pool finished: {} of {} items processed, {} failed",
        name,
        report.processed(),
        total,
        report.failed()
    );
    Ok(report)
}

async fn work<T, J>(worker_id: Uuid, queue: WorkQueue<T>, job: Arc<J>, wait: Duration) -> WorkerReport
where
    J: Job<T>,
{
    info!("Worker started");
    let mut processed = 0;
    let mut failed = 0;

    let exit = loop {
        match queue.next(wait).await {
            Next::Item(item) => match job.run(item).await {
                JobOutcome::Done => processed += 1,
                JobOutcome::Failed => failed += 1,
            },
            Next::Closed => break WorkerExit::Drained,
            Next::IdleTimeout => {
                warn!("No work for {:?}, exiting", wait);
                break WorkerExit::IdleTimeout;
            }
        }
    };

    info!("Worker exiting, queue empty, processed {} items ({} failed)", processed, failed);
    WorkerReport {
        worker_id,
        processed,
        failed,
        exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct Collect {
        seen: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl Job<u32> for Collect {
        async fn run(&self, item: u32) -> JobOutcome {
            tokio::task::yield_now().await;
            self.seen.lock().unwrap().push(item);
            if item % 10 == 0 {
                JobOutcome::Failed
            } else {
                JobOutcome::Done
            }
        }
    }

    fn collector() -> Arc<Collect> {
        Arc::new(Collect {
            seen: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_every_item_handled_once() {
        let job = collector();
        let config = PoolConfig {
            workers: 5,
            queue_wait_timeout: Duration::from_secs(5),
        };

        let report = run_pool("test", WorkQueue::from_items(1..=100u32), Arc::clone(&job), &config)
            .await
            .unwrap();

        assert_eq!(report.total, 100);
        assert_eq!(report.workers.len(), 5);
        assert_eq!(report.processed(), 90);
        assert_eq!(report.failed(), 10);
        assert!(report.workers.iter().all(|w| w.exit == WorkerExit::Drained));

        let seen = job.seen.lock().unwrap();
        let unique: HashSet<u32> = seen.iter().copied().collect();
        assert_eq!(seen.len(), 100);
        assert_eq!(unique.len(), 100);
    }

    #[tokio::test]
    async fn test_single_worker_keeps_fifo_order() {
        let job = collector();
        run_pool("fifo", WorkQueue::from_items(vec![3, 1, 2]), Arc::clone(&job), &PoolConfig::default())
            .await
            .unwrap();

        assert_eq!(*job.seen.lock().unwrap(), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_empty_queue_drains_without_waiting() {
        let config = PoolConfig {
            workers: 3,
            queue_wait_timeout: Duration::from_secs(3600),
        };
        let report = run_pool("empty", WorkQueue::<u32>::from_items(vec![]), collector(), &config)
            .await
            .unwrap();

        assert_eq!(report.processed(), 0);
        assert_eq!(report.workers.len(), 3);
    }

    #[tokio::test]
    async fn test_zero_workers_rejected() {
        let config = PoolConfig {
            workers: 0,
            ..Default::default()
        };
        let result = run_pool("none", WorkQueue::from_items(vec![1u32]), collector(), &config).await;
        assert!(matches!(result, Err(WorkerError::Config(_))));
    }

    #[tokio::test]
    async fn test_worker_ids_are_unique() {
        let config = PoolConfig {
            workers: 4,
            ..Default::default()
        };
        let report = run_pool("ids", WorkQueue::from_items(0..8u32), collector(), &config)
            .await
            .unwrap();

        let ids: HashSet<Uuid> = report.workers.iter().map(|w| w.worker_id).collect();
        assert_eq!(ids.len(), 4);
    }

    /// Owned payload without a `Clone` impl
    struct Payload(Vec<u8>);

    struct Sum {
        total: Mutex<usize>,
    }

    #[async_trait]
    impl Job<Payload> for Sum {
        async fn run(&self, item: Payload) -> JobOutcome {
            *self.total.lock().unwrap() += item.0.len();
            JobOutcome::Done
        }
    }

    #[tokio::test]
    async fn test_items_need_not_be_clone() {
        let job = Arc::new(Sum {
            total: Mutex::new(0),
        });
        let config = PoolConfig {
            workers: 2,
            ..Default::default()
        };
        let items = (1..=3).map(|n| Payload(vec![0; n]));

        let report = run_pool("owned", WorkQueue::from_items(items), Arc::clone(&job), &config)
            .await
            .unwrap();

        assert_eq!(report.processed(), 3);
        assert_eq!(*job.total.lock().unwrap(), 6);
    }
}
