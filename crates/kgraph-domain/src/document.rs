//! Documents and the sentences queued from them

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A source document split into ordered sentences
///
/// Documents are immutable once built. They are shared by reference with
/// every [`PendingSentence`] cut from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    sentences: Vec<String>,
}

impl Document {
    /// Create a document from its path and segmented sentences
    pub fn new(path: impl Into<PathBuf>, sentences: Vec<String>) -> Self {
        Self {
            path: path.into(),
            sentences,
        }
    }

    /// Path the document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Base file name used as connection provenance
    ///
    /// Backslashes count as separators too, so paths recorded on Windows
    /// still reduce to their final component.
    ///
    /// # Examples
    ///
    /// ```
    /// use kgraph_domain::Document;
    ///
    /// let doc = Document::new("data/notes.txt", vec![]);
    /// assert_eq!(doc.file_name(), "notes.txt");
    ///
    /// let doc = Document::new(r"C:\data\notes.txt", vec![]);
    /// assert_eq!(doc.file_name(), "notes.txt");
    /// ```
    pub fn file_name(&self) -> String {
        let raw = self.path.to_string_lossy();
        raw.rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

/// A sentence waiting in the extraction queue
///
/// Created when the queue is populated and dropped once the sentence has been
/// processed or given up on.
#[derive(Debug, Clone)]
pub struct PendingSentence {
    /// Document the sentence came from
    pub document: Arc<Document>,

    /// Sentence text
    pub sentence: String,
}

impl PendingSentence {
    /// Create a pending sentence owned by `document`
    pub fn new(document: Arc<Document>, sentence: impl Into<String>) -> Self {
        Self {
            document,
            sentence: sentence.into(),
        }
    }

    /// Expand documents into pending sentences, document order then sentence order
    pub fn from_documents(documents: &[Arc<Document>]) -> Vec<Self> {
        documents
            .iter()
            .flat_map(|doc| {
                doc.sentences()
                    .iter()
                    .map(move |s| Self::new(Arc::clone(doc), s.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_plain() {
        let doc = Document::new("report.txt", vec![]);
        assert_eq!(doc.file_name(), "report.txt");
    }

    #[test]
    fn test_file_name_mixed_separators() {
        let doc = Document::new(r"data/sub\dir\report.txt", vec![]);
        assert_eq!(doc.file_name(), "report.txt");
    }

    #[test]
    fn test_pending_order() {
        let a = Arc::new(Document::new("a.txt", vec!["a1".into(), "a2".into()]));
        let b = Arc::new(Document::new("b.txt", vec!["b1".into()]));

        let pending = PendingSentence::from_documents(&[a, b]);
        let texts: Vec<_> = pending.iter().map(|p| p.sentence.as_str()).collect();

        assert_eq!(texts, vec!["a1", "a2", "b1"]);
        assert_eq!(pending[2].document.file_name(), "b.txt");
    }

    #[test]
    fn test_pending_empty_document() {
        let empty = Arc::new(Document::new("empty.txt", vec![]));
        assert!(PendingSentence::from_documents(&[empty]).is_empty());
    }
}
