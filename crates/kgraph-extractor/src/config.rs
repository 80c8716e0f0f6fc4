//! Configuration for the Extractor

use kgraph_worker::{PoolConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Base URL of the extraction service
    pub service_url: String,

    /// Number of concurrent extraction workers
    pub workers: usize,

    /// Calls per sentence before it is dropped
    pub max_attempts: u32,

    /// Fixed delay between attempts (seconds)
    pub retry_delay_secs: u64,

    /// Longest a worker waits on an empty queue (seconds)
    pub queue_wait_timeout_secs: u64,

    /// Timeout for a single service request (seconds)
    pub request_timeout_secs: u64,
}

impl Default for ExtractorConfig {
    /// 5 workers, 5 attempts 3 s apart
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".to_string(),
            workers: 5,
            max_attempts: 5,
            retry_delay_secs: 3,
            queue_wait_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

impl ExtractorConfig {
    /// Aggressive preset: more workers, fewer and quicker retries
    pub fn aggressive() -> Self {
        Self {
            workers: 10,
            max_attempts: 3,
            retry_delay_secs: 1,
            request_timeout_secs: 10,
            ..Self::default()
        }
    }

    /// Lenient preset: gentle on a struggling service
    pub fn lenient() -> Self {
        Self {
            workers: 2,
            max_attempts: 8,
            retry_delay_secs: 10,
            request_timeout_secs: 120,
            ..Self::default()
        }
    }

    /// Retry policy applied to every sentence
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::fixed(self.max_attempts, Duration::from_secs(self.retry_delay_secs))
    }

    /// Worker pool settings
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            workers: self.workers,
            queue_wait_timeout: Duration::from_secs(self.queue_wait_timeout_secs),
        }
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.service_url.trim().is_empty() {
            return Err("service_url must not be empty".to_string());
        }
        if self.workers == 0 {
            return Err("workers must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.queue_wait_timeout_secs == 0 {
            return Err("queue_wait_timeout_secs must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
