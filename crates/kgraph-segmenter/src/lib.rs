//! kgraph Segmenter
//!
//! Turns a directory of text files into ordered [`Document`]s.
//!
//! # Overview
//!
//! ```text
//! data/*.txt → DocumentLoader → Segmenter → Vec<Document>
//! ```
//!
//! The [`Segmenter`] collaborator is a trait so another sentence splitter
//! can be dropped in. [`UnicodeSegmenter`] is the default: UAX #29 sentence
//! boundaries plus a fixed English stop-word list.
//!
//! # Example Usage
//!
//! ```no_run
//! use kgraph_segmenter::{DocumentLoader, UnicodeSegmenter};
//!
//! # fn example() -> Result<(), kgraph_segmenter::SegmentError> {
//! let loader = DocumentLoader::new(UnicodeSegmenter::english());
//! let documents = loader.load_dir("./data")?;
//! println!("Loaded {} documents", documents.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`Document`]: kgraph_domain::Document
//! [`Segmenter`]: kgraph_domain::Segmenter

#![warn(missing_docs)]

mod error;
mod loader;
mod stop_words;
mod unicode;

pub use error::SegmentError;
pub use loader::DocumentLoader;
pub use stop_words::ENGLISH_STOP_WORDS;
pub use unicode::UnicodeSegmenter;
