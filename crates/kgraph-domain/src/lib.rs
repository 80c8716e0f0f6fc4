//! kgraph Domain Layer
//!
//! Core data model and collaborator contracts for the knowledge-graph
//! pipeline. Every other crate in the workspace depends on this one; it holds
//! no I/O of its own.
//!
//! ## Key Concepts
//!
//! - **Document**: a source file split into ordered sentences
//! - **PendingSentence**: one queued unit of extraction work
//! - **ExtractionRecord**: a typed relation returned by the extraction service
//! - **Connection**: a subject/relation/object triple with confidence and provenance
//! - **Statement**: an upsert instruction for the graph store
//!
//! ## Collaborators
//!
//! Sentence segmentation, relation extraction and the graph engine live
//! outside the core. They are reached only through the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod document;
pub mod extraction;
pub mod statement;
pub mod traits;

// Re-exports for convenience
pub use connection::Connection;
pub use document::{Document, PendingSentence};
pub use extraction::ExtractionRecord;
pub use statement::Statement;
pub use traits::{GraphStore, RelationExtractor, Segmenter};
