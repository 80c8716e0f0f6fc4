//! Closed FIFO work queue

use std::time::Duration;

/// Result of one receive on a [`WorkQueue`]
#[derive(Debug, PartialEq, Eq)]
pub enum Next<T> {
    /// An item to process
    Item(T),
    /// Queue is closed and drained
    Closed,
    /// Nothing arrived within the wait
    IdleTimeout,
}

/// A FIFO queue filled completely and closed before any consumer runs
///
/// Clones share the same underlying channel, one clone per worker.
#[derive(Debug)]
pub struct WorkQueue<T> {
    rx: flume::Receiver<T>,
    total: usize,
}

impl<T> Clone for WorkQueue<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
            total: self.total,
        }
    }
}

impl<T> WorkQueue<T> {
    /// Enqueue every item in order, then close the queue
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let (tx, rx) = flume::unbounded();
        let mut total = 0;
        for item in items {
            // The receiver is alive, so an unbounded send cannot fail
            if tx.send(item).is_ok() {
                total += 1;
            }
        }
        drop(tx);
        Self { rx, total }
    }

    /// Number of items originally enqueued
    pub fn total(&self) -> usize {
        self.total
    }

    /// Items still waiting
    pub fn remaining(&self) -> usize {
        self.rx.len()
    }

    /// Take the next item, waiting at most `wait`
    pub async fn next(&self, wait: Duration) -> Next<T> {
        match tokio::time::timeout(wait, self.rx.recv_async()).await {
            Ok(Ok(item)) => Next::Item(item),
            Ok(Err(flume::RecvError::Disconnected)) => Next::Closed,
            Err(_) => Next::IdleTimeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fifo_then_closed() {
        let queue = WorkQueue::from_items(vec!["a", "b", "c"]);
        let wait = Duration::from_millis(50);

        assert_eq!(queue.total(), 3);
        assert_eq!(queue.next(wait).await, Next::Item("a"));
        assert_eq!(queue.next(wait).await, Next::Item("b"));
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.next(wait).await, Next::Item("c"));
        assert_eq!(queue.next(wait).await, Next::Closed);
        assert_eq!(queue.next(wait).await, Next::Closed);
    }

    #[tokio::test]
    async fn test_empty_queue_is_closed_immediately() {
        let queue: WorkQueue<u8> = WorkQueue::from_items(Vec::new());
        assert_eq!(queue.next(Duration::from_secs(60)).await, Next::Closed);
    }

    #[tokio::test]
    async fn test_clones_share_items() {
        let queue = WorkQueue::from_items(1..=4);
        let other = queue.clone();
        let wait = Duration::from_millis(50);

        assert_eq!(queue.next(wait).await, Next::Item(1));
        assert_eq!(other.next(wait).await, Next::Item(2));
        assert_eq!(queue.remaining(), 2);
    }
}
