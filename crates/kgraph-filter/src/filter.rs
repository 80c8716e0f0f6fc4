//! Deduplication and stop-word passes

use kgraph_domain::{Connection, Segmenter};
use kgraph_store::ConnectionStore;
use std::collections::HashSet;
use tracing::{debug, info};

/// Counts from one filtering run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Connections before filtering
    pub before: usize,

    /// Later copies of an earlier connection
    pub duplicates_removed: usize,

    /// Connections whose subject is a stop word
    pub stop_words_removed: usize,

    /// Connections left
    pub after: usize,
}

impl FilterReport {
    /// Total removed by both passes
    pub fn removed(&self) -> usize {
        self.duplicates_removed + self.stop_words_removed
    }
}

/// Removes duplicate and stop-word connections in place
#[derive(Debug, Clone)]
pub struct ConnectionFilter {
    stop_words: HashSet<String>,
}

/// Hashable view of a connection; confidence compares by bit pattern
#[derive(PartialEq, Eq, Hash)]
struct DedupKey<'a> {
    from_entity: &'a str,
    to_entity: &'a str,
    relationship: &'a str,
    confidence: u64,
    source_file: &'a str,
}

impl<'a> DedupKey<'a> {
    fn of(connection: &'a Connection) -> Self {
        // 0.0 and -0.0 are equal as values
        let confidence = if connection.confidence == 0.0 {
            0.0f64.to_bits()
        } else {
            connection.confidence.to_bits()
        };
        Self {
            from_entity: &connection.from_entity,
            to_entity: &connection.to_entity,
            relationship: &connection.relationship,
            confidence,
            source_file: &connection.source_file,
        }
    }
}

impl ConnectionFilter {
    /// Create a filter for the given stop words
    ///
    /// Words are lower-cased so matching is case-insensitive.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Use the stop words of a segmenter's language
    pub fn for_segmenter(segmenter: &dyn Segmenter) -> Self {
        Self::new(segmenter.stop_words())
    }

    /// Whether `entity`, lowercased, is a stop word
    pub fn is_stop_word(&self, entity: &str) -> bool {
        self.stop_words.contains(&entity.to_lowercase())
    }

    /// Drop later copies of value-equal connections, keeping the first
    ///
    /// Equality is `Connection`'s `PartialEq`, so a NaN confidence never
    /// equals another and such rows are always kept. Returns the number
    /// removed.
    pub fn dedup(&self, connections: &mut Vec<Connection>) -> usize {
        let before = connections.len();
        let keep: Vec<bool> = {
            let mut seen = HashSet::with_capacity(before);
            connections
                .iter()
                .map(|connection| {
                    let first =
                        connection.confidence.is_nan() || seen.insert(DedupKey::of(connection));
                    if !first {
                        debug!("Removing duplicate: {}", connection);
                    }
                    first
                })
                .collect()
        };

        let mut flags = keep.into_iter();
        connections.retain(|_| flags.next().unwrap_or(false));

        let removed = before - connections.len();
        info!("Removed {} duplicate connections", removed);
        removed
    }

    /// Drop connections whose subject is a stop word
    ///
    /// Returns the number removed.
    pub fn remove_stop_words(&self, connections: &mut Vec<Connection>) -> usize {
        let before = connections.len();
        connections.retain(|connection| {
            if self.is_stop_word(&connection.from_entity) {
                debug!("Removing stop-word subject: {}", connection);
                false
            } else {
                true
            }
        });

        let removed = before - connections.len();
        info!("Removed {} connections with stop-word subjects", removed);
        removed
    }

    /// Run both passes, duplicates first
    pub fn apply(&self, connections: &mut Vec<Connection>) -> FilterReport {
        let before = connections.len();
        let duplicates_removed = self.dedup(connections);
        let stop_words_removed = self.remove_stop_words(connections);

        let report = FilterReport {
            before,
            duplicates_removed,
            stop_words_removed,
            after: connections.len(),
        };
        info!(
            "Filtering removed {} of {} connections, {} left",
            report.removed(),
            before,
            report.after
        );
        report
    }

    /// Run both passes over the contents of `store`
    pub fn apply_to_store(&self, store: &ConnectionStore) -> FilterReport {
        store.update(|connections| self.apply(connections))
    }
}
