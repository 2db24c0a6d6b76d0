//! Word tokenization
//!
//! A word is a maximal run of Unicode word characters (`\w+`: letters, marks,
//! digits and connector punctuation such as `_`). Tokens are lowercased.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Invalid regex pattern"));

/// Lowercased word tokens of `text`, produced lazily
///
/// Calling this again on the same text starts over from the beginning.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_REGEX.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Byte ranges of every word in `text`, in order
pub fn word_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    WORD_REGEX.find_iter(text).map(|m| m.range())
}
