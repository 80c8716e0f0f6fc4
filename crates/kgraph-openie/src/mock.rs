//! Mock extractor for deterministic testing

use crate::ExtractError;
use async_trait::async_trait;
use kgraph_domain::{ExtractionRecord, RelationExtractor};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock extractor returning pre-configured records without network calls
///
/// Responses and failures are scripted per sentence. Clones share state, so a
/// test can keep a handle and read the call count after the pipeline owns the
/// other clone.
///
/// # Examples
///
/// ```
/// use kgraph_openie::MockExtractor;
/// use kgraph_domain::RelationExtractor;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut extractor = MockExtractor::default();
/// extractor.fail_times("flaky sentence", 2);
///
/// assert!(extractor.extract("flaky sentence").await.is_err());
/// assert!(extractor.extract("flaky sentence").await.is_err());
/// assert!(extractor.extract("flaky sentence").await.is_ok());
/// assert_eq!(extractor.call_count(), 3);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    default_records: Vec<ExtractionRecord>,
    responses: Arc<Mutex<HashMap<String, Vec<ExtractionRecord>>>>,
    pending_failures: Arc<Mutex<HashMap<String, usize>>>,
    fail_all: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Create a mock returning `records` for every unscripted sentence
    pub fn new(records: Vec<ExtractionRecord>) -> Self {
        Self {
            default_records: records,
            ..Default::default()
        }
    }

    /// Create a mock whose every call fails
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    /// Return `records` for `sentence`
    pub fn add_response(&mut self, sentence: impl Into<String>, records: Vec<ExtractionRecord>) {
        lock(&self.responses).insert(sentence.into(), records);
    }

    /// Fail the next `times` calls for `sentence`, then answer normally
    pub fn fail_times(&mut self, sentence: impl Into<String>, times: usize) {
        lock(&self.pending_failures).insert(sentence.into(), times);
    }

    /// Number of times `extract` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl RelationExtractor for MockExtractor {
    type Error = ExtractError;

    async fn extract(&self, sentence: &str) -> Result<Vec<ExtractionRecord>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_all {
            return Err(ExtractError::Mock(format!("scripted failure for '{}'", sentence)));
        }

        {
            let mut failures = lock(&self.pending_failures);
            if let Some(remaining) = failures.get_mut(sentence) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(ExtractError::Mock(format!("scripted failure for '{}'", sentence)));
                }
            }
        }

        let responses = lock(&self.responses);
        Ok(responses
            .get(sentence)
            .cloned()
            .unwrap_or_else(|| self.default_records.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str) -> ExtractionRecord {
        ExtractionRecord {
            subject: subject.to_string(),
            relation: "is".to_string(),
            objects: vec!["here".to_string()],
            confidence: 0.5,
        }
    }

    #[tokio::test]
    async fn test_mock_default_records() {
        let extractor = MockExtractor::new(vec![record("A")]);
        let records = extractor.extract("anything").await.unwrap();
        assert_eq!(records, vec![record("A")]);
    }

    #[tokio::test]
    async fn test_mock_specific_responses() {
        let mut extractor = MockExtractor::default();
        extractor.add_response("one", vec![record("One")]);

        assert_eq!(extractor.extract("one").await.unwrap()[0].subject, "One");
        assert!(extractor.extract("two").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let extractor = MockExtractor::failing();
        assert!(matches!(extractor.extract("x").await, Err(ExtractError::Mock(_))));
        assert_eq!(extractor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_clone_shares_state() {
        let extractor1 = MockExtractor::default();
        let extractor2 = extractor1.clone();

        extractor1.extract("a").await.unwrap();
        extractor2.extract("b").await.unwrap();

        assert_eq!(extractor1.call_count(), 2);
        extractor2.reset_call_count();
        assert_eq!(extractor1.call_count(), 0);
    }
}
