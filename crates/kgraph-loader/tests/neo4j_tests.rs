//! Tests against a live Neo4j instance
//!
//! Run with `cargo test -p kgraph-loader -- --ignored` after starting Neo4j on
//! bolt://localhost:7687 and setting KGRAPH_NEO4J_USER / KGRAPH_NEO4J_PASSWORD.

use kgraph_domain::{Connection, GraphStore};
use kgraph_loader::{Credentials, GraphLoader, LoaderConfig, Neo4jStore, QueryBuilder};
use std::sync::Arc;

fn credentials() -> Credentials {
    let user = std::env::var("KGRAPH_NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string());
    let password = std::env::var("KGRAPH_NEO4J_PASSWORD").unwrap_or_else(|_| "password".to_string());
    Credentials::parse(&format!("{}\n{}\n", user, password)).unwrap()
}

#[tokio::test]
#[ignore] // Requires Neo4j to be running
async fn test_merge_is_idempotent() {
    let config = LoaderConfig::default();
    let store = Neo4jStore::connect(&config.url, &credentials(), &config.connect_policy())
        .await
        .unwrap();

    let connection = Connection::new("kgraph-test-a", "kgraph-test \"b\"", "tests", 0.5, "t.txt");
    let statements = QueryBuilder::new().build_all([&connection, &connection]);

    let report = GraphLoader::new(Arc::new(store.clone()), config)
        .run(statements)
        .await
        .unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
#[ignore] // Requires Neo4j to be running
async fn test_invalid_statement_fails() {
    let config = LoaderConfig::default();
    let store = Neo4jStore::connect(&config.url, &credentials(), &config.connect_policy())
        .await
        .unwrap();

    let bad = kgraph_domain::Statement::new("MERGE (f:Entity { name: \"broken\\\" });");
    assert!(store.execute(&bad).await.is_err());
}
