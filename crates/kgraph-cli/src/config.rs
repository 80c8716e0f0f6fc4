//! Pipeline configuration.

use crate::error::{PipelineError, Result};
use kgraph_extractor::ExtractorConfig;
use kgraph_loader::LoaderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "kgraph.toml";

/// Full pipeline configuration.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input documents and checkpoints
    pub input: InputConfig,

    /// Extraction service and worker pool
    pub extraction: ExtractorConfig,

    /// Graph store and loader pool
    pub graph: LoaderConfig,
}

/// Where documents and checkpoints live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory whose regular files are the input documents
    pub data_dir: PathBuf,

    /// Checkpoint directory, relative to `data_dir` unless absolute
    pub cache_dir: PathBuf,

    /// Post-extraction checkpoint file name
    pub connections_file: String,

    /// Post-filter checkpoint file name
    pub filtered_connections_file: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            cache_dir: PathBuf::from("cache"),
            connections_file: "entity_connections.cache".to_string(),
            filtered_connections_file: "entity_connections_filtered.cache".to_string(),
        }
    }
}

impl InputConfig {
    /// Resolved checkpoint directory
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join(&self.cache_dir)
    }
}

impl PipelineConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| PipelineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load `path` if given, else `kgraph.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        if self.input.connections_file.is_empty() || self.input.filtered_connections_file.is_empty() {
            return Err(PipelineError::Config("checkpoint file names must not be empty".into()));
        }
        if self.input.connections_file == self.input.filtered_connections_file {
            return Err(PipelineError::Config(
                "connections_file and filtered_connections_file must differ".into(),
            ));
        }
        self.extraction.validate().map_err(PipelineError::Config)?;
        self.graph.validate().map_err(PipelineError::Config)?;
        Ok(())
    }
}
