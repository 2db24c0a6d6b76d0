//! Final results of a word-frequency run and their presentation

pub mod formatter;

pub use formatter::{FormatType, OutputFormatter};

use crate::mapreduce::types::RankedEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected while running the pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PipelineStats {
    /// Characters in the input text
    pub characters: usize,
    /// Chunks the text was split into
    pub chunks: usize,
    /// Total word occurrences
    pub total_words: u64,
    /// Distinct words
    pub distinct_words: usize,
    /// Wall-clock duration in seconds
    pub duration_secs: f64,
}

/// Ranked words plus run statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrequencyReport {
    /// Number of entries requested
    pub top_n: usize,
    pub rankings: Vec<RankedEntry>,
    pub stats: PipelineStats,
    pub generated_at: DateTime<Utc>,
}

impl FrequencyReport {
    pub fn new(top_n: usize, rankings: Vec<RankedEntry>, stats: PipelineStats) -> Self {
        Self {
            top_n,
            rankings,
            stats,
            generated_at: Utc::now(),
        }
    }

    /// A report with nothing to show
    pub fn empty(top_n: usize) -> Self {
        Self::new(top_n, Vec::new(), PipelineStats::default())
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}
