//! Typed extraction results

/// One relation returned by the extraction service for a sentence
///
/// `objects` may be empty; such records produce no connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRecord {
    /// Subject argument text
    pub subject: String,

    /// Relation phrase text
    pub relation: String,

    /// Object argument texts, in service order
    pub objects: Vec<String>,

    /// Service confidence score; no range is assumed
    pub confidence: f64,
}

impl ExtractionRecord {
    /// First object argument, if any
    pub fn first_object(&self) -> Option<&str> {
        self.objects.first().map(String::as_str)
    }
}
