//! Statements sent to the graph store

use std::fmt;

/// An opaque upsert instruction in the graph store's query language
///
/// Built 1:1 from a surviving connection and consumed exactly once by the
/// graph loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement(String);

impl Statement {
    /// Wrap raw statement text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Statement text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the statement, returning its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
