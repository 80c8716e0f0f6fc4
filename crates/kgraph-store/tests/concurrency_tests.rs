//! Concurrency tests for kgraph-store
//!
//! These tests verify that concurrent appends neither lose nor duplicate
//! connections.

use kgraph_domain::Connection;
use kgraph_store::ConnectionStore;
use std::collections::HashSet;
use std::thread;

const WORKERS: usize = 8;
const PER_WORKER: usize = 500;

fn conn(worker: usize, n: usize) -> Connection {
    Connection::new(format!("w{}", worker), format!("n{}", n), "r", 0.5, "f.txt")
}

#[test]
fn test_threads_append_without_loss() {
    let store = ConnectionStore::new();

    thread::scope(|scope| {
        for w in 0..WORKERS {
            let store = store.clone();
            scope.spawn(move || {
                for n in 0..PER_WORKER {
                    store.append(conn(w, n));
                }
            });
        }
    });

    let all = store.snapshot();
    assert_eq!(all.len(), WORKERS * PER_WORKER);

    let unique: HashSet<String> = all
        .iter()
        .map(|c| format!("{}/{}", c.from_entity, c.to_entity))
        .collect();
    assert_eq!(unique.len(), WORKERS * PER_WORKER);
}

#[test]
fn test_threads_keep_per_worker_order() {
    let store = ConnectionStore::new();

    thread::scope(|scope| {
        for w in 0..WORKERS {
            let store = store.clone();
            scope.spawn(move || {
                for n in 0..PER_WORKER {
                    store.append(conn(w, n));
                }
            });
        }
    });

    let all = store.snapshot();
    for w in 0..WORKERS {
        let key = format!("w{}", w);
        let seq: Vec<String> = all
            .iter()
            .filter(|c| c.from_entity == key)
            .map(|c| c.to_entity.clone())
            .collect();
        let expected: Vec<String> = (0..PER_WORKER).map(|n| format!("n{}", n)).collect();
        assert_eq!(seq, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_tasks_append_value_equal_duplicates() {
    let store = ConnectionStore::new();
    let mut handles = Vec::new();

    for _ in 0..WORKERS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..PER_WORKER {
                store.append(Connection::new("same", "same", "r", 0.1, "f.txt"));
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Genuine value-equal duplicates are all kept
    assert_eq!(store.len(), WORKERS * PER_WORKER);
}
