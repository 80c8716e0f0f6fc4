//! Disk checkpoints of the connection store

use crate::StoreError;
use kgraph_domain::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One checkpoint file
///
/// Rows are `from_entity,to_entity,relationship,confidence,source_file` with
/// standard CSV quoting and no header. Blank lines are ignored on read so
/// files written with stray empty rows still load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    path: PathBuf,
}

impl Checkpoint {
    /// Checkpoint at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the checkpoint file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read every connection, in file order
    pub fn read(&self) -> Result<Vec<Connection>, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        let mut connections = Vec::new();
        for row in reader.deserialize::<Connection>() {
            connections.push(row.map_err(|e| self.csv_error(e))?);
        }

        debug!("Read {} connections from {}", connections.len(), self.path.display());
        Ok(connections)
    }

    /// Replace the checkpoint with `connections`
    ///
    /// Rows go to a sibling temp file first and are renamed into place, so a
    /// crash mid-write never leaves a truncated checkpoint behind.
    pub fn write(&self, connections: &[Connection]) -> Result<(), StoreError> {
        let tmp = self.tmp_path();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)
            .map_err(|e| self.csv_error(e))?;

        for connection in connections {
            writer.serialize(connection).map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        drop(writer);

        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("Checkpointed {} connections to {}", connections.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

/// The cache directory and the two checkpoints it holds
#[derive(Debug, Clone)]
pub struct Checkpoints {
    dir: PathBuf,
    primary: Checkpoint,
    filtered: Checkpoint,
}

impl Checkpoints {
    /// Open the cache directory, creating it if absent
    pub fn open(
        dir: impl Into<PathBuf>,
        primary_file: &str,
        filtered_file: &str,
    ) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        Ok(Self {
            primary: Checkpoint::new(dir.join(primary_file)),
            filtered: Checkpoint::new(dir.join(filtered_file)),
            dir,
        })
    }

    /// Cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Post-extraction checkpoint
    pub fn primary(&self) -> &Checkpoint {
        &self.primary
    }

    /// Post-filter checkpoint
    pub fn filtered(&self) -> &Checkpoint {
        &self.filtered
    }
}
