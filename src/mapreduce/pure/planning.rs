//! Pure chunk planning
//!
//! Splits the input text into contiguous, non-overlapping chunks. Sizes and
//! offsets are counted in characters; a chunk never splits a character.

use super::tokenizer::word_spans;
use crate::error::{ErrorCode, Result, WordFreqError};
use crate::mapreduce::types::Chunk;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default number of chunks the text is split into
pub const DEFAULT_CHUNK_COUNT: usize = 10;

/// Where chunk boundaries may fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkBoundary {
    /// Split at raw character offsets. A word straddling a boundary is
    /// counted as two fragments.
    #[default]
    Character,
    /// Move each split point forward past the word it would cut, so no word
    /// straddles two chunks. May produce fewer chunks than requested.
    Word,
}

impl std::fmt::Display for ChunkBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Word => write!(f, "word"),
        }
    }
}

/// Pure: Split `text` into `target_count` contiguous chunks
///
/// `size = len / target_count` characters; chunk `k` starts at `k * size` and
/// the last chunk runs to the end of the text, absorbing the remainder.
/// When `target_count` exceeds the text length the plan is clamped to one
/// chunk per character. An empty text yields no chunks.
///
/// # Errors
///
/// Returns a chunking error when `target_count` is zero.
pub fn plan_chunks(
    text: &Arc<str>,
    target_count: usize,
    boundary: ChunkBoundary,
) -> Result<Vec<Chunk>> {
    if target_count == 0 {
        return Err(WordFreqError::chunking_with_code(
            ErrorCode::CHUNKING_INVALID_SIZE,
            "chunk count must be at least 1",
        ));
    }

    let char_len = text.chars().count();
    if char_len == 0 {
        return Ok(Vec::new());
    }

    let count = target_count.min(char_len);
    let size = char_len / count;

    let mut cuts = character_cuts(text, count, size);
    if boundary == ChunkBoundary::Word {
        cuts = align_to_words(text, cuts);
    }

    Ok(cuts
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Chunk::new(index, text.clone(), pair[0]..pair[1]))
        .collect())
}

/// Byte offsets of each chunk start, followed by the end of the text
fn character_cuts(text: &str, count: usize, size: usize) -> Vec<usize> {
    let mut cuts = Vec::with_capacity(count + 1);
    for (char_index, (byte_index, _)) in text.char_indices().enumerate() {
        if cuts.len() == count {
            break;
        }
        if char_index == cuts.len() * size {
            cuts.push(byte_index);
        }
    }
    cuts.push(text.len());
    cuts
}

/// Push every interior cut that lands inside a word to that word's end,
/// dropping cuts that collapse onto their neighbour
fn align_to_words(text: &str, cuts: Vec<usize>) -> Vec<usize> {
    let spans: Vec<_> = word_spans(text).collect();
    let last = cuts.len() - 1;

    let mut aligned: Vec<usize> = Vec::with_capacity(cuts.len());
    for (i, cut) in cuts.into_iter().enumerate() {
        let cut = if i == 0 || i == last {
            cut
        } else {
            // First span ending after the cut; it straddles the cut if it starts before it
            let idx = spans.partition_point(|span| span.end <= cut);
            match spans.get(idx) {
                Some(span) if span.start < cut => span.end,
                _ => cut,
            }
        };
        if aligned.last().is_some_and(|&prev| cut <= prev) {
            continue;
        }
        aligned.push(cut);
    }

    // The end of the text always closes the final chunk
    if aligned.last() != Some(&text.len()) {
        aligned.push(text.len());
    }
    aligned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapreduce::pure::counting::count_words;
    use crate::mapreduce::pure::aggregation::aggregate;

    fn arc(text: &str) -> Arc<str> {
        Arc::from(text)
    }

    fn joined(chunks: &[Chunk]) -> String {
        chunks.iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn test_plan_even_split() {
        let text = arc("abcdefghij");
        let chunks = plan_chunks(&text, 5, ChunkBoundary::Character).unwrap();
        let parts: Vec<&str> = chunks.iter().map(|c| c.as_str()).collect();
        assert_eq!(parts, vec!["ab", "cd", "ef", "gh", "ij"]);
        assert_eq!(chunks[4].index, 4);
    }

    #[test]
    fn test_last_chunk_absorbs_remainder() {
        let text = arc("abcdefghijk");
        let chunks = plan_chunks(&text, 3, ChunkBoundary::Character).unwrap();
        let parts: Vec<&str> = chunks.iter().map(|c| c.as_str()).collect();
        assert_eq!(parts, vec!["abc", "def", "ghijk"]);
    }

    #[test]
    fn test_single_chunk_is_whole_text() {
        let text = arc("the cat sat");
        let chunks = plan_chunks(&text, 1, ChunkBoundary::Character).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].as_str(), "the cat sat");
    }

    #[test]
    fn test_more_chunks_than_characters_clamps() {
        let text = arc("abc");
        let chunks = plan_chunks(&text, 10, ChunkBoundary::Character).unwrap();
        let parts: Vec<&str> = chunks.iter().map(|c| c.as_str()).collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_chunks_is_an_error() {
        let err = plan_chunks(&arc("abc"), 0, ChunkBoundary::Character).unwrap_err();
        assert!(matches!(err, WordFreqError::Chunking { .. }));
        assert_eq!(err.code(), ErrorCode::CHUNKING_INVALID_SIZE);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        let chunks = plan_chunks(&arc(""), 10, ChunkBoundary::Character).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_multibyte_characters_are_not_split() {
        let text = arc("ééééé");
        let chunks = plan_chunks(&text, 2, ChunkBoundary::Character).unwrap();
        let parts: Vec<&str> = chunks.iter().map(|c| c.as_str()).collect();
        assert_eq!(parts, vec!["éé", "ééé"]);
        assert_eq!(joined(&chunks), "ééééé");
    }

    #[test]
    fn test_character_boundary_can_split_words() {
        let text = arc("abcdef");
        let chunks = plan_chunks(&text, 2, ChunkBoundary::Character).unwrap();
        let total = aggregate(chunks.iter().map(|c| count_words(c.as_str())));
        assert_eq!(total.get("abc"), 1);
        assert_eq!(total.get("def"), 1);
        assert_eq!(total.get("abcdef"), 0);
    }

    #[test]
    fn test_word_boundary_keeps_words_whole() {
        let text = arc("hello world again");
        let chunks = plan_chunks(&text, 3, ChunkBoundary::Word).unwrap();
        assert_eq!(joined(&chunks), "hello world again");
        let total = aggregate(chunks.iter().map(|c| count_words(c.as_str())));
        assert_eq!(total, count_words("hello world again"));
    }

    #[test]
    fn test_word_boundary_never_yields_empty_chunks() {
        let text = arc("supercalifragilistic");
        let chunks = plan_chunks(&text, 5, ChunkBoundary::Word).unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks.iter().all(|c| !c.is_empty()));
    }
}
