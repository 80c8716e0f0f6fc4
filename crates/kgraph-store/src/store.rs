//! The in-memory connection store

use crate::{Checkpoint, StoreError};
use kgraph_domain::Connection;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// Insertion-ordered collection of connections
///
/// Cloning is cheap and clones share the same collection, which is how the
/// extraction workers append into it concurrently. Every append takes the
/// lock, so no entry is lost or doubled however many workers write at once.
#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    connections: Arc<Mutex<Vec<Connection>>>,
    seeded: bool,
}

impl ConnectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `connections`
    pub fn with_connections(connections: Vec<Connection>, seeded: bool) -> Self {
        Self {
            connections: Arc::new(Mutex::new(connections)),
            seeded,
        }
    }

    /// Seed from `checkpoint` when it holds rows, otherwise start empty
    ///
    /// A seeded store means the extraction phase must be skipped. A checkpoint
    /// with no rows does not seed, so extraction runs again.
    pub fn from_checkpoint(checkpoint: &Checkpoint) -> Result<Self, StoreError> {
        if !checkpoint.exists() {
            return Ok(Self::new());
        }

        let connections = checkpoint.read()?;
        if connections.is_empty() {
            info!(
                "Checkpoint {} is empty, extracting again",
                checkpoint.path().display()
            );
            return Ok(Self::new());
        }
        info!(
            "Loaded {} connections from checkpoint {}",
            connections.len(),
            checkpoint.path().display()
        );
        Ok(Self::with_connections(connections, true))
    }

    /// Whether the contents came from a checkpoint rather than extraction
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Append one connection
    pub fn append(&self, connection: Connection) {
        self.lock().push(connection);
    }

    /// Append several connections as one contiguous run
    pub fn extend(&self, connections: impl IntoIterator<Item = Connection>) {
        self.lock().extend(connections);
    }

    /// Number of connections held
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the connections, in order
    pub fn snapshot(&self) -> Vec<Connection> {
        self.lock().clone()
    }

    /// Run `f` with mutable access to the ordered collection
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<Connection>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Write the current contents to `checkpoint`
    pub fn persist(&self, checkpoint: &Checkpoint) -> Result<(), StoreError> {
        let guard = self.lock();
        checkpoint.write(&guard)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Connection>> {
        // A worker that panicked mid-push leaves the Vec valid, so keep going
        self.connections.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn conn(n: usize) -> Connection {
        Connection::new(format!("e{}", n), "x", "r", 0.5, "f.txt")
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let store = ConnectionStore::new();
        store.append(conn(1));
        store.append(conn(2));
        store.extend(vec![conn(3), conn(4)]);

        let names: Vec<_> = store.snapshot().into_iter().map(|c| c.from_entity).collect();
        assert_eq!(names, vec!["e1", "e2", "e3", "e4"]);
        assert!(!store.is_seeded());
    }

    #[test]
    fn test_clones_share_contents() {
        let store = ConnectionStore::new();
        let handle = store.clone();
        handle.append(conn(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_removes_in_place() {
        let store = ConnectionStore::with_connections((0..5).map(conn).collect(), false);
        let removed = store.update(|v| {
            let before = v.len();
            v.retain(|c| c.from_entity != "e2");
            before - v.len()
        });

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_from_missing_checkpoint_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ConnectionStore::from_checkpoint(&Checkpoint::new(dir.path().join("none"))).unwrap();

        assert!(store.is_empty());
        assert!(!store.is_seeded());
    }

    #[test]
    fn test_from_empty_checkpoint_is_not_seeded() {
        let dir = TempDir::new().unwrap();
        let checkpoint = Checkpoint::new(dir.path().join("empty.cache"));
        ConnectionStore::new().persist(&checkpoint).unwrap();
        assert!(checkpoint.exists());

        let store = ConnectionStore::from_checkpoint(&checkpoint).unwrap();
        assert!(store.is_empty());
        assert!(!store.is_seeded());
    }

    #[test]
    fn test_persist_and_reload_is_identical() {
        let dir = TempDir::new().unwrap();
        let checkpoint = Checkpoint::new(dir.path().join("c.cache"));

        let store = ConnectionStore::with_connections((0..10).map(conn).collect(), false);
        store.persist(&checkpoint).unwrap();

        let reloaded = ConnectionStore::from_checkpoint(&checkpoint).unwrap();
        assert!(reloaded.is_seeded());
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }
}
