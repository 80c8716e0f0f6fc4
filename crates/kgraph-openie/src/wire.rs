//! Wire format of the extraction service
//!
//! The service answers with a JSON array shaped like
//!
//! ```json
//! [
//!   {
//!     "confidence": 0.91,
//!     "sentence": "Alice met Bob.",
//!     "extraction": {
//!       "arg1": { "text": "Alice" },
//!       "rel": { "text": "met" },
//!       "arg2s": [ { "text": "Bob" } ]
//!     }
//!   }
//! ]
//! ```
//!
//! Unknown fields are ignored. Anything else is an `InvalidResponse`.

use crate::ExtractError;
use kgraph_domain::ExtractionRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WireExtraction {
    confidence: f64,
    extraction: WireBody,
}

#[derive(Debug, Deserialize)]
struct WireBody {
    arg1: WirePart,
    rel: WirePart,
    #[serde(default)]
    arg2s: Vec<WirePart>,
}

#[derive(Debug, Deserialize)]
struct WirePart {
    text: String,
}

impl From<WireExtraction> for ExtractionRecord {
    fn from(wire: WireExtraction) -> Self {
        ExtractionRecord {
            subject: wire.extraction.arg1.text,
            relation: wire.extraction.rel.text,
            objects: wire.extraction.arg2s.into_iter().map(|p| p.text).collect(),
            confidence: wire.confidence,
        }
    }
}

/// Parse a service response body into typed records
pub fn parse_response(body: &str) -> Result<Vec<ExtractionRecord>, ExtractError> {
    let wire: Vec<WireExtraction> = serde_json::from_str(body)?;
    Ok(wire.into_iter().map(ExtractionRecord::from).collect())
}
