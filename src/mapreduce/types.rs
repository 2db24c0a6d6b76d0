//! Core data types shared by the map and reduce phases

use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};
use std::ops::Range;
use std::sync::Arc;

/// A contiguous slice of the input text handed to one map task
///
/// Chunks share the text through an `Arc<str>` so they can move into worker
/// tasks without copying. `range` is a byte range that always falls on
/// character boundaries.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Position of this chunk in the plan (0-based)
    pub index: usize,
    text: Arc<str>,
    range: Range<usize>,
}

impl Chunk {
    pub(crate) fn new(index: usize, text: Arc<str>, range: Range<usize>) -> Self {
        debug_assert!(text.is_char_boundary(range.start));
        debug_assert!(text.is_char_boundary(range.end));
        Self { index, text, range }
    }

    /// The chunk's text
    pub fn as_str(&self) -> &str {
        &self.text[self.range.clone()]
    }

    /// Byte range of this chunk within the full text
    pub fn byte_range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Word → occurrence count
///
/// Used both for the partial counts produced by one map task and for the
/// global counts produced by the reduce phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `word`
    pub fn increment(&mut self, word: impl Into<String>) {
        self.add(word, 1);
    }

    /// Add `count` occurrences of `word`
    pub fn add(&mut self, word: impl Into<String>, count: u64) {
        *self.counts.entry(word.into()).or_insert(0) += count;
    }

    /// Count for `word`, zero when absent
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl IntoIterator for WordCounts {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordCounts {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = WordCounts::new();
        for (word, count) in iter {
            counts.add(word, count);
        }
        counts
    }
}

/// One row of the top-N output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(&str, u64)> for RankedEntry {
    fn from((word, count): (&str, u64)) -> Self {
        Self::new(word, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_views_shared_text() {
        let text: Arc<str> = Arc::from("héllo world");
        let chunk = Chunk::new(1, text.clone(), 0..6);
        assert_eq!(chunk.as_str(), "héllo");
        assert_eq!(chunk.char_len(), 5);
        assert_eq!(chunk.byte_range(), 0..6);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_word_counts_accumulate() {
        let mut counts = WordCounts::new();
        counts.increment("the");
        counts.increment("the");
        counts.add("cat", 3);

        assert_eq!(counts.get("the"), 2);
        assert_eq!(counts.get("cat"), 3);
        assert_eq!(counts.get("dog"), 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_word_counts_from_iter_sums_duplicates() {
        let counts: WordCounts = vec![("a", 1), ("b", 2), ("a", 4)].into_iter().collect();
        assert_eq!(counts.get("a"), 5);
        assert_eq!(counts.get("b"), 2);
    }

    #[test]
    fn test_word_counts_serialize_as_map() {
        let counts: WordCounts = vec![("word", 7)].into_iter().collect();
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json, serde_json::json!({"word": 7}));
    }
}
