//! kgraph Worker
//!
//! Shared machinery for the pipeline's two worker-pool phases.
//!
//! # Overview
//!
//! - [`RetryPolicy`]: bounded retry with fixed or exponential delay
//! - [`WorkQueue`]: a fully populated, already-closed FIFO queue
//! - [`run_pool`]: N workers draining one queue through a [`Job`]
//!
//! # Shutdown
//!
//! A [`WorkQueue`] is filled and closed before any worker starts. A worker
//! stops when it finds the queue closed and empty, so draining is
//! deterministic. The bounded wait on each receive survives only as an idle
//! guard: if it fires the worker logs a warning and exits.
//!
//! # Usage
//!
//! ```
//! use async_trait::async_trait;
//! use kgraph_worker::{run_pool, Job, JobOutcome, PoolConfig, WorkQueue};
//! use std::sync::Arc;
//!
//! struct Double;
//!
//! #[async_trait]
//! impl Job<u32> for Double {
//!     async fn run(&self, item: u32) -> JobOutcome {
//!         let _ = item * 2;
//!         JobOutcome::Done
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), kgraph_worker::WorkerError> {
//! let queue = WorkQueue::from_items(0..10u32);
//! let report = run_pool("double", queue, Arc::new(Double), &PoolConfig::default()).await?;
//! assert_eq!(report.processed(), 10);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod pool;
mod queue;
mod retry;

pub use error::WorkerError;
pub use pool::{run_pool, Job, JobOutcome, PoolConfig, PoolReport, WorkerExit, WorkerReport};
pub use queue::{Next, WorkQueue};
pub use retry::{Backoff, RetryError, RetryPolicy};
