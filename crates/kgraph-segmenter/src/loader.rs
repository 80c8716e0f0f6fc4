//! Directory → documents

use crate::error::SegmentError;
use kgraph_domain::{Document, Segmenter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads every regular file in a directory and segments it into a [`Document`]
pub struct DocumentLoader<S: Segmenter> {
    segmenter: S,
}

impl<S: Segmenter> DocumentLoader<S> {
    /// Create a loader around a segmenter
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// The segmenter used for splitting and stop words
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Load all regular files in `dir`
    ///
    /// One document per file, in directory-listing order. Subdirectories are
    /// skipped. Any unreadable file aborts the whole load.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<Document>, SegmentError> {
        let dir = dir.as_ref();
        let files = list_files(dir)?;

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            documents.push(self.load_file(path)?);
        }

        let sentences: usize = documents.iter().map(|d| d.sentences().len()).sum();
        info!(
            "Loaded {} documents ({} sentences) from {}",
            documents.len(),
            sentences,
            dir.display()
        );

        Ok(documents)
    }

    /// Read and segment a single file
    pub fn load_file(&self, path: PathBuf) -> Result<Document, SegmentError> {
        let text = fs::read_to_string(&path).map_err(|source| SegmentError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let sentences = self.segmenter.sentences(&text);
        debug!("{}: {} sentences", path.display(), sentences.len());

        Ok(Document::new(path, sentences))
    }
}

/// Regular files directly inside `dir`, in listing order
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, SegmentError> {
    let read_dir_err = |source| SegmentError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        // Follows symlinks, so a link to a file counts as a file
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
