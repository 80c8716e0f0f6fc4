//! CLI command definitions and argument parsing.

use crate::config::PipelineConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kgraph - Build a knowledge graph from a directory of text documents.
#[derive(Debug, Parser)]
#[command(name = "kgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "KGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of input documents
    #[arg(short, long, global = true, env = "KGRAPH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the extraction service
    #[arg(long, global = true, env = "KGRAPH_EXTRACTION_URL")]
    pub extraction_url: Option<String>,

    /// Bolt URL of the graph store
    #[arg(long, global = true, env = "KGRAPH_GRAPH_URL")]
    pub graph_url: Option<String>,

    /// Two-line credentials file for the graph store
    #[arg(long, global = true)]
    pub credentials: Option<PathBuf>,

    /// Number of extraction workers
    #[arg(long, global = true)]
    pub extraction_workers: Option<usize>,

    /// Number of graph loader workers
    #[arg(long, global = true)]
    pub loader_workers: Option<usize>,

    /// Log at debug level
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log warnings and errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Extract, filter and load (default)
    Run,

    /// Extract and filter only, writing both checkpoints
    Extract,

    /// Load the filtered checkpoint into the graph store
    Load,

    /// Print the statements built from the filtered checkpoint
    Statements,
}

impl Cli {
    /// Subcommand to run, `run` when none was given.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Apply flag overrides on top of file configuration.
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(dir) = &self.data_dir {
            config.input.data_dir = dir.clone();
        }
        if let Some(url) = &self.extraction_url {
            config.extraction.service_url = url.clone();
        }
        if let Some(url) = &self.graph_url {
            config.graph.url = url.clone();
        }
        if let Some(path) = &self.credentials {
            config.graph.credentials_file = path.clone();
        }
        if let Some(workers) = self.extraction_workers {
            config.extraction.workers = workers;
        }
        if let Some(workers) = self.loader_workers {
            config.graph.workers = workers;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_run() {
        let cli = Cli::try_parse_from(["kgraph"]).unwrap();
        assert_eq!(cli.command(), Command::Run);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["kgraph", "extract"]).unwrap();
        assert_eq!(cli.command(), Command::Extract);

        let cli = Cli::try_parse_from(["kgraph", "statements", "--quiet"]).unwrap();
        assert_eq!(cli.command(), Command::Statements);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["kgraph", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "kgraph",
            "load",
            "--data-dir",
            "/tmp/docs",
            "--extraction-url",
            "http://ie:9000",
            "--graph-url",
            "bolt://db:7687",
            "--credentials",
            "/etc/kgraph/creds",
            "--extraction-workers",
            "8",
            "--loader-workers",
            "2",
        ])
        .unwrap();

        let mut config = PipelineConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.input.data_dir, PathBuf::from("/tmp/docs"));
        assert_eq!(config.extraction.service_url, "http://ie:9000");
        assert_eq!(config.graph.url, "bolt://db:7687");
        assert_eq!(config.graph.credentials_file, PathBuf::from("/etc/kgraph/creds"));
        assert_eq!(config.extraction.workers, 8);
        assert_eq!(config.graph.workers, 2);
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["kgraph", "run"]).unwrap();
        let mut config = PipelineConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, PipelineConfig::default());
    }
}
