//! Map and reduce primitives: per-chunk counting and pairwise merging

use super::tokenizer::tokenize;
use crate::mapreduce::types::WordCounts;

/// Count every word in `text`
///
/// Deterministic and independent of any other chunk, so it can run on any
/// worker in any order.
pub fn count_words(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for word in tokenize(text) {
        counts.increment(word);
    }
    counts
}

/// Merge two count maps, summing counts of shared words
///
/// Commutative and associative. The smaller map is drained into the larger
/// one, which does not change the result.
pub fn merge_counts(a: WordCounts, b: WordCounts) -> WordCounts {
    let (mut larger, smaller) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (word, count) in smaller {
        larger.add(word, count);
    }
    larger
}
