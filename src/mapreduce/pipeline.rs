//! End-to-end word-frequency pipeline
//!
//! Text → chunk plan → map phase → reduce (fold) → top-N selection.

use super::aggregation::{FrequencyReport, PipelineStats};
use super::map_phase::{ChunkMapper, MapPhaseExecutor, Scheduling, WordCountMapper};
use super::pure::{aggregate, plan_chunks, top_n, ChunkBoundary, DEFAULT_CHUNK_COUNT, DEFAULT_TOP_N};
use crate::error::{Result, WordFreqError};
use crate::source::{Retrieved, TextSource};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Settings for one pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Number of chunks to split the text into
    pub chunk_count: usize,
    /// Number of ranked entries to return
    pub top_n: usize,
    pub boundary: ChunkBoundary,
    pub scheduling: Scheduling,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            chunk_count: DEFAULT_CHUNK_COUNT,
            top_n: DEFAULT_TOP_N,
            boundary: ChunkBoundary::default(),
            scheduling: Scheduling::default(),
        }
    }
}

/// Word-frequency MapReduce over a single text
pub struct WordFrequencyPipeline {
    settings: PipelineSettings,
    map_phase: MapPhaseExecutor,
}

impl WordFrequencyPipeline {
    /// Create a pipeline that counts words with [`WordCountMapper`]
    pub fn new(settings: PipelineSettings) -> Self {
        Self::with_mapper(settings, Arc::new(WordCountMapper))
    }

    /// Create a pipeline with a custom chunk mapper
    pub fn with_mapper(settings: PipelineSettings, mapper: Arc<dyn ChunkMapper>) -> Self {
        let map_phase = MapPhaseExecutor::new(mapper, settings.scheduling);
        Self {
            settings,
            map_phase,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Fetch text from `source` and run the pipeline on it
    ///
    /// A source with no content produces an empty report.
    pub async fn run_source(&self, source: &dyn TextSource) -> Result<FrequencyReport> {
        info!("Retrieving text from {}", source.describe());
        match source.fetch().await? {
            Retrieved::Text(text) => self.run(text).await,
            Retrieved::NoContent { reason } => {
                warn!("No text retrieved from {}: {}", source.describe(), reason);
                Ok(FrequencyReport::empty(self.settings.top_n))
            }
        }
    }

    /// Run the pipeline on `text`
    ///
    /// An empty text, or one without any words, produces an empty report.
    /// Chunking and map failures are returned as errors.
    pub async fn run(&self, text: impl Into<Arc<str>>) -> Result<FrequencyReport> {
        let text: Arc<str> = text.into();
        let start = Instant::now();

        if text.is_empty() {
            info!("Input text is empty, nothing to count");
            return Ok(FrequencyReport::empty(self.settings.top_n));
        }

        let chunks = plan_chunks(&text, self.settings.chunk_count, self.settings.boundary)?;
        let chunk_count = chunks.len();
        info!(
            "Planned {} chunks over {} bytes ({} boundaries)",
            chunk_count,
            text.len(),
            self.settings.boundary
        );
        for chunk in &chunks {
            debug!("Chunk {} spans bytes {:?}", chunk.index, chunk.byte_range());
        }

        let partials = self.map_phase.execute(chunks).await?;

        let global = aggregate(partials);
        info!(
            "Reduce phase completed: {} distinct words, {} total",
            global.len(),
            global.total()
        );

        let rankings = match top_n(&global, self.settings.top_n) {
            Ok(rankings) => rankings,
            Err(e @ WordFreqError::EmptyResult { .. }) => {
                warn!("Text contains no words: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let stats = PipelineStats {
            characters: text.chars().count(),
            chunks: chunk_count,
            total_words: global.total(),
            distinct_words: global.len(),
            duration_secs: start.elapsed().as_secs_f64(),
        };

        Ok(FrequencyReport::new(self.settings.top_n, rankings, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapreduce::types::{Chunk, RankedEntry, WordCounts};
    use crate::source::StaticTextSource;

    fn settings(chunk_count: usize, top_n: usize) -> PipelineSettings {
        PipelineSettings {
            chunk_count,
            top_n,
            boundary: ChunkBoundary::Character,
            scheduling: Scheduling::Threads { workers: 2 },
        }
    }

    #[tokio::test]
    async fn test_single_chunk_scenario() {
        let pipeline = WordFrequencyPipeline::new(settings(1, 2));
        let report = pipeline
            .run("the cat sat on the mat the cat ran")
            .await
            .unwrap();

        assert_eq!(
            report.rankings,
            vec![RankedEntry::new("the", 3), RankedEntry::new("cat", 2)]
        );
        assert_eq!(report.stats.chunks, 1);
        assert_eq!(report.stats.total_words, 9);
        assert_eq!(report.stats.distinct_words, 6);
    }

    #[tokio::test]
    async fn test_empty_text_yields_empty_report() {
        let pipeline = WordFrequencyPipeline::new(settings(10, 10));
        let report = pipeline.run("").await.unwrap();
        assert!(report.is_empty());
        assert_eq!(report.stats, PipelineStats::default());
    }

    #[tokio::test]
    async fn test_punctuation_only_yields_empty_report() {
        let pipeline = WordFrequencyPipeline::new(settings(3, 10));
        let report = pipeline.run("... !!! ---").await.unwrap();
        assert!(report.is_empty());
        assert_eq!(report.stats.chunks, 3);
    }

    #[tokio::test]
    async fn test_more_chunks_than_characters() {
        let pipeline = WordFrequencyPipeline::new(settings(10, 10));
        let report = pipeline.run("a b").await.unwrap();
        assert_eq!(report.stats.chunks, 3);
        assert_eq!(
            report.rankings,
            vec![RankedEntry::new("a", 1), RankedEntry::new("b", 1)]
        );
    }

    #[tokio::test]
    async fn test_zero_chunk_count_fails() {
        let pipeline = WordFrequencyPipeline::new(settings(0, 10));
        let err = pipeline.run("some text").await.unwrap_err();
        assert!(matches!(err, WordFreqError::Chunking { .. }));
    }

    #[tokio::test]
    async fn test_map_failure_propagates() {
        struct Broken;
        impl ChunkMapper for Broken {
            fn map_chunk(&self, _chunk: &Chunk) -> Result<WordCounts> {
                Err(WordFreqError::other("bad bytes"))
            }
        }

        let pipeline = WordFrequencyPipeline::with_mapper(settings(2, 5), Arc::new(Broken));
        let err = pipeline.run("one two three").await.unwrap_err();
        assert!(matches!(err, WordFreqError::MapTask { .. }));
    }

    #[tokio::test]
    async fn test_run_is_repeatable() {
        let pipeline = WordFrequencyPipeline::new(settings(4, 5));
        let text = "b a c b a b d e f a c";
        let first = pipeline.run(text).await.unwrap();
        let second = pipeline.run(text).await.unwrap();
        assert_eq!(first.rankings, second.rankings);
    }

    #[tokio::test]
    async fn test_run_source_no_content() {
        let pipeline = WordFrequencyPipeline::new(settings(4, 5));
        let report = pipeline
            .run_source(&StaticTextSource::new(""))
            .await
            .unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_run_source_with_text() {
        let pipeline = WordFrequencyPipeline::new(settings(2, 1));
        let report = pipeline
            .run_source(&StaticTextSource::new("dog dog cat"))
            .await
            .unwrap();
        assert_eq!(report.rankings, vec![RankedEntry::new("dog", 2)]);
    }
}
