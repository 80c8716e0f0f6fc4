//! kgraph Filter
//!
//! Cleans extracted connections before they are turned into statements.
//!
//! Two passes run in order over the store:
//!
//! 1. **Deduplication**: the first of each group of value-equal connections
//!    survives, later copies are dropped.
//! 2. **Stop words**: connections whose subject, lowercased, is a stop word
//!    are dropped.
//!
//! Survivors keep their relative order.
//!
//! # Examples
//!
//! ```
//! use kgraph_domain::Connection;
//! use kgraph_filter::ConnectionFilter;
//!
//! let filter = ConnectionFilter::new(["it", "the"]);
//! let mut connections = vec![
//!     Connection::new("Alice", "Bob", "loves", 0.9, "f.txt"),
//!     Connection::new("Alice", "Bob", "loves", 0.9, "f.txt"),
//!     Connection::new("It", "rain", "is", 0.4, "f.txt"),
//! ];
//!
//! let report = filter.apply(&mut connections);
//! assert_eq!(report.duplicates_removed, 1);
//! assert_eq!(report.stop_words_removed, 1);
//! assert_eq!(connections.len(), 1);
//! ```

#![warn(missing_docs)]

mod filter;

pub use filter::{ConnectionFilter, FilterReport};
