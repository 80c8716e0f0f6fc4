//! Neo4j graph store

use crate::{Credentials, LoaderError};
use async_trait::async_trait;
use kgraph_domain::{GraphStore, Statement};
use kgraph_worker::{RetryError, RetryPolicy};
use neo4rs::{query, ConfigBuilder, Graph};
use tracing::{debug, info};

/// A connection to Neo4j over Bolt
///
/// The driver keeps a small pool internally; every statement runs in its own
/// write transaction.
#[derive(Clone)]
pub struct Neo4jStore {
    graph: Graph,
    url: String,
}

impl Neo4jStore {
    /// Connect to `url`, retrying per `policy`
    pub async fn connect(
        url: &str,
        credentials: &Credentials,
        policy: &RetryPolicy,
    ) -> Result<Self, LoaderError> {
        let user = credentials.username.as_str();
        let password = credentials.password.as_str();

        let graph = policy
            .run(|attempt| async move {
                debug!("Connecting to {} (attempt {})", url, attempt);
                let config = ConfigBuilder::default()
                    .uri(url)
                    .user(user)
                    .password(password)
                    .build()?;
                Graph::connect(config).await
            })
            .await
            .map_err(|RetryError::Exhausted { attempts, last }| LoaderError::Connect {
                url: url.to_string(),
                attempts,
                reason: last.to_string(),
            })?;

        info!("Connected to graph store at {}", url);
        Ok(Self {
            graph,
            url: url.to_string(),
        })
    }

    /// URL this store is connected to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    type Error = LoaderError;

    async fn execute(&self, statement: &Statement) -> Result<(), Self::Error> {
        let mut txn = self.graph.start_txn().await?;
        txn.run(query(statement.as_str())).await?;
        txn.commit().await?;
        Ok(())
    }
}
