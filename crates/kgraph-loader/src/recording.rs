//! In-memory graph store for testing

use crate::LoaderError;
use async_trait::async_trait;
use kgraph_domain::{GraphStore, Statement};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Graph store that records every executed statement
///
/// Statements containing a configured marker are rejected instead. Clones
/// share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingGraph {
    executed: Arc<Mutex<Vec<Statement>>>,
    reject_marker: Option<String>,
}

impl RecordingGraph {
    /// Create an empty graph that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every statement whose text contains `marker`
    pub fn rejecting(marker: impl Into<String>) -> Self {
        Self {
            reject_marker: Some(marker.into()),
            ..Default::default()
        }
    }

    /// Statements executed so far, in completion order
    pub fn statements(&self) -> Vec<Statement> {
        lock(&self.executed).clone()
    }

    /// Number of statements executed
    pub fn len(&self) -> usize {
        lock(&self.executed).len()
    }

    /// Whether nothing has been executed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl GraphStore for RecordingGraph {
    type Error = LoaderError;

    async fn execute(&self, statement: &Statement) -> Result<(), Self::Error> {
        if let Some(marker) = &self.reject_marker {
            if statement.as_str().contains(marker.as_str()) {
                return Err(LoaderError::Rejected(statement.to_string()));
            }
        }
        lock(&self.executed).push(statement.clone());
        Ok(())
    }
}
