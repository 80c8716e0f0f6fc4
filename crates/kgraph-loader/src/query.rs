//! Cypher statement generation

use kgraph_domain::{Connection, Statement};
use tracing::debug;

/// Builds one idempotent MERGE statement per connection
///
/// Only `"` is escaped (as `\"`). Any other character with meaning inside a
/// Cypher string literal, such as a trailing backslash, passes through
/// unchanged and can break the statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self
    }

    /// Escape embedded double quotes
    pub fn escape(text: &str) -> String {
        text.replace('"', "\\\"")
    }

    /// Statement upserting both entities and the relation between them
    ///
    /// # Examples
    ///
    /// ```
    /// use kgraph_domain::Connection;
    /// use kgraph_loader::QueryBuilder;
    ///
    /// let conn = Connection::new("Alice", "Bob", "loves", 0.9, "f.txt");
    /// assert_eq!(
    ///     QueryBuilder::new().build(&conn).as_str(),
    ///     r#"MERGE (f:Entity { name: "Alice" }) MERGE (t:Entity { name: "Bob" }) MERGE (f)-[:RELATION { name: "loves", confidence: 0.9 }]->(t);"#
    /// );
    /// ```
    pub fn build(&self, connection: &Connection) -> Statement {
        let text = format!(
            "MERGE (f:Entity {{ name: \"{}\" }}) MERGE (t:Entity {{ name: \"{}\" }}) \
             MERGE (f)-[:RELATION {{ name: \"{}\", confidence: {:?} }}]->(t);",
            Self::escape(&connection.from_entity),
            Self::escape(&connection.to_entity),
            Self::escape(&connection.relationship),
            connection.confidence,
        );
        debug!("Built statement {}", text);
        Statement::new(text)
    }

    /// One statement per connection, in iteration order
    pub fn build_all<'a>(&self, connections: impl IntoIterator<Item = &'a Connection>) -> Vec<Statement> {
        connections.into_iter().map(|c| self.build(c)).collect()
    }
}
