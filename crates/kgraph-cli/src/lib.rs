//! kgraph CLI library.
//!
//! This library wires the pipeline crates together: configuration loading,
//! the [`PipelineContext`] that runs the phases, and run-level metrics.

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;

pub use cli::{Cli, Command};
pub use config::{InputConfig, PipelineConfig};
pub use error::{PipelineError, Result};
pub use metrics::PipelineMetrics;
pub use pipeline::PipelineContext;
