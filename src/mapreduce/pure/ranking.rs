//! Pure top-N selection over the global count map

use crate::error::{Result, WordFreqError};
use crate::mapreduce::types::{RankedEntry, WordCounts};
use std::cmp::Ordering;

/// Default number of ranked entries
pub const DEFAULT_TOP_N: usize = 10;

/// Count descending, then word ascending
fn rank_order(a: &(&String, &u64), b: &(&String, &u64)) -> Ordering {
    b.1.cmp(a.1).then_with(|| a.0.cmp(b.0))
}

/// Pure: Select the `n` most frequent words
///
/// Entries are ordered by count descending. Equal counts are ordered by the
/// word, ascending, so the output is the same on every run.
///
/// # Errors
///
/// Returns an empty-result error when `counts` holds no words.
pub fn top_n(counts: &WordCounts, n: usize) -> Result<Vec<RankedEntry>> {
    if counts.is_empty() {
        return Err(WordFreqError::empty_result("no words to rank"));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    if n < entries.len() {
        entries.select_nth_unstable_by(n - 1, rank_order);
        entries.truncate(n);
    }
    entries.sort_unstable_by(rank_order);

    Ok(entries
        .into_iter()
        .map(|(word, count)| RankedEntry::new(word.clone(), *count))
        .collect())
}
