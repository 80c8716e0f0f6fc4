//! Connection module - the triple the whole pipeline moves around

use crate::{Document, ExtractionRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A subject/relation/object triple with confidence and provenance
///
/// Identity is structural: two connections are the same connection when all
/// five fields are equal. Connections are never mutated once built; the
/// filter removes them, it does not edit them.
///
/// Field order is the checkpoint column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Subject entity
    pub from_entity: String,

    /// Object entity
    pub to_entity: String,

    /// Relation phrase
    pub relationship: String,

    /// Extraction confidence (opaque decimal)
    pub confidence: f64,

    /// Base name of the document the sentence came from
    pub source_file: String,
}

impl Connection {
    /// Create a new connection
    pub fn new(
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
        relationship: impl Into<String>,
        confidence: f64,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            from_entity: from_entity.into(),
            to_entity: to_entity.into(),
            relationship: relationship.into(),
            confidence,
            source_file: source_file.into(),
        }
    }

    /// Build a connection from an extraction record
    ///
    /// Returns `None` when the record has no object argument. When it has
    /// several, only the first becomes the target entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use kgraph_domain::{Connection, Document, ExtractionRecord};
    ///
    /// let doc = Document::new("data/f.txt", vec![]);
    /// let record = ExtractionRecord {
    ///     subject: "Alice".into(),
    ///     relation: "met".into(),
    ///     objects: vec!["Bob".into(), "Carol".into()],
    ///     confidence: 0.8,
    /// };
    ///
    /// let conn = Connection::from_record(&record, &doc).unwrap();
    /// assert_eq!(conn.to_entity, "Bob");
    /// assert_eq!(conn.source_file, "f.txt");
    /// ```
    pub fn from_record(record: &ExtractionRecord, document: &Document) -> Option<Self> {
        let object = record.first_object()?;
        Some(Self::new(
            record.subject.clone(),
            object,
            record.relation.clone(),
            record.confidence,
            document.file_name(),
        ))
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from_entity={}, to_entity={}, relationship={}, confidence={}, source_file={}",
            self.from_entity, self.to_entity, self.relationship, self.confidence, self.source_file
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(objects: Vec<&str>) -> ExtractionRecord {
        ExtractionRecord {
            subject: "Alice".to_string(),
            relation: "loves".to_string(),
            objects: objects.into_iter().map(String::from).collect(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_from_record_without_objects() {
        let doc = Document::new("f.txt", vec![]);
        assert!(Connection::from_record(&record(vec![]), &doc).is_none());
    }

    #[test]
    fn test_from_record_takes_first_object() {
        let doc = Document::new("dir/f.txt", vec![]);
        let conn = Connection::from_record(&record(vec!["Bob", "Carol"]), &doc).unwrap();

        assert_eq!(conn, Connection::new("Alice", "Bob", "loves", 0.9, "f.txt"));
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = Connection::new("A", "B", "r", 0.5, "f.txt");

        assert_eq!(base, base.clone());
        assert_ne!(base, Connection::new("A", "B", "r", 0.5, "g.txt"));
        assert_ne!(base, Connection::new("A", "B", "r", 0.6, "f.txt"));
        assert_ne!(base, Connection::new("A", "C", "r", 0.5, "f.txt"));
    }

    #[test]
    fn test_display() {
        let conn = Connection::new("A", "B", "r", 0.5, "f.txt");
        assert_eq!(
            conn.to_string(),
            "from_entity=A, to_entity=B, relationship=r, confidence=0.5, source_file=f.txt"
        );
    }
}
