//! Default segmenter built on Unicode sentence boundaries

use crate::stop_words::ENGLISH_STOP_WORDS;
use kgraph_domain::Segmenter;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Sentence splitter using UAX #29 boundaries
///
/// Sentences are trimmed; whitespace-only spans are dropped.
#[derive(Debug, Clone)]
pub struct UnicodeSegmenter {
    stop_words: HashSet<String>,
}

impl UnicodeSegmenter {
    /// Create a segmenter with a custom stop-word list
    ///
    /// Words are lower-cased on the way in so lookups can case-fold.
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

    /// Segmenter with the built-in English stop words
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self::english()
    }
}

impl Segmenter for UnicodeSegmenter {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_sentences_in_order() {
        let seg = UnicodeSegmenter::english();
        let sentences = seg.sentences("Alice met Bob. They went to Paris! Was it fun?");

        assert_eq!(
            sentences,
            vec!["Alice met Bob.", "They went to Paris!", "Was it fun?"]
        );
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        let seg = UnicodeSegmenter::english();
        assert!(seg.sentences("").is_empty());
        assert!(seg.sentences("   \n\n  ").is_empty());
    }

    #[test]
    fn test_english_stop_words() {
        let seg = UnicodeSegmenter::english();
        assert!(seg.stop_words().contains("they"));
        assert!(seg.stop_words().contains("it"));
        assert!(!seg.stop_words().contains("alice"));
    }

    #[test]
    fn test_custom_stop_words_are_lowercased() {
        let seg = UnicodeSegmenter::new(["The", "IT"]);
        assert!(seg.stop_words().contains("the"));
        assert!(seg.stop_words().contains("it"));
        assert_eq!(seg.stop_words().len(), 2);
    }
}
