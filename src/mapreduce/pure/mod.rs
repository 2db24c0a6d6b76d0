//! Pure functional core of the word-count MapReduce
//!
//! Everything here is synchronous and free of I/O: tokenizing, counting a
//! chunk, merging counts, planning chunks and ranking the result.

pub mod aggregation;
pub mod counting;
pub mod planning;
pub mod ranking;
pub mod tokenizer;

pub use aggregation::aggregate;
pub use counting::{count_words, merge_counts};
pub use planning::{plan_chunks, ChunkBoundary, DEFAULT_CHUNK_COUNT};
pub use ranking::{top_n, DEFAULT_TOP_N};
pub use tokenizer::tokenize;
