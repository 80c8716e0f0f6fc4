//! Configuration for the graph loader

use kgraph_worker::{PoolConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Graph store connection and loader pool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Bolt URL of the graph store
    pub url: String,

    /// File holding the username and password, one per line
    pub credentials_file: PathBuf,

    /// Number of loader workers
    pub workers: usize,

    /// Longest a worker waits on an empty queue (seconds)
    pub queue_wait_timeout_secs: u64,

    /// Connection attempts before giving up
    pub connect_attempts: u32,

    /// Initial delay between connection attempts (seconds), doubled each time
    pub connect_retry_delay_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            url: "bolt://localhost:7687".to_string(),
            credentials_file: PathBuf::from(".credentials"),
            workers: 1,
            queue_wait_timeout_secs: 5,
            connect_attempts: 3,
            connect_retry_delay_secs: 2,
        }
    }
}

impl LoaderConfig {
    /// Worker pool settings
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            workers: self.workers,
            queue_wait_timeout: Duration::from_secs(self.queue_wait_timeout_secs),
        }
    }

    /// Retry policy for opening the connection
    pub fn connect_policy(&self) -> RetryPolicy {
        RetryPolicy::exponential(
            self.connect_attempts,
            Duration::from_secs(self.connect_retry_delay_secs),
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("graph url must not be empty".to_string());
        }
        if self.workers == 0 {
            return Err("loader workers must be greater than 0".to_string());
        }
        if self.queue_wait_timeout_secs == 0 {
            return Err("queue_wait_timeout_secs must be greater than 0".to_string());
        }
        if self.connect_attempts == 0 {
            return Err("connect_attempts must be greater than 0".to_string());
        }
        Ok(())
    }
}
