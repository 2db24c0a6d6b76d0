//! Map phase execution
//!
//! Dispatches one map task per chunk, waits for all of them, and hands back
//! the partial counts. Completion order is not preserved. If any task fails
//! the whole phase fails and no partial result is returned.

use crate::error::{ErrorCode, Result, WordFreqError};
use crate::mapreduce::pure::count_words;
use crate::mapreduce::types::{Chunk, WordCounts};
use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

/// Counts the words of a single chunk
///
/// Implementations must not depend on other chunks or on shared mutable
/// state; the driver may call them concurrently and in any order.
pub trait ChunkMapper: Send + Sync {
    fn map_chunk(&self, chunk: &Chunk) -> Result<WordCounts>;
}

/// The standard mapper: tokenize and count
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCountMapper;

impl ChunkMapper for WordCountMapper {
    fn map_chunk(&self, chunk: &Chunk) -> Result<WordCounts> {
        Ok(count_words(chunk.as_str()))
    }
}

/// How map tasks are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduling {
    /// Bounded pool of blocking threads, at most `workers` chunks at a time
    Threads { workers: usize },
    /// All chunks as futures polled on the calling task, no extra threads
    Cooperative,
}

impl Scheduling {
    /// Thread pool sized to the machine's available parallelism
    pub fn threads_default() -> Self {
        Self::Threads {
            workers: default_workers(),
        }
    }
}

impl Default for Scheduling {
    fn default() -> Self {
        Self::threads_default()
    }
}

impl std::fmt::Display for Scheduling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Threads { workers } => write!(f, "threads ({} workers)", workers),
            Self::Cooperative => write!(f, "cooperative"),
        }
    }
}

/// Number of worker threads used when none is configured
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Executor for the map phase
pub struct MapPhaseExecutor {
    mapper: Arc<dyn ChunkMapper>,
    scheduling: Scheduling,
}

impl MapPhaseExecutor {
    /// Create an executor with a custom mapper
    pub fn new(mapper: Arc<dyn ChunkMapper>, scheduling: Scheduling) -> Self {
        Self { mapper, scheduling }
    }

    /// Create an executor using [`WordCountMapper`]
    pub fn word_count(scheduling: Scheduling) -> Self {
        Self::new(Arc::new(WordCountMapper), scheduling)
    }

    pub fn scheduling(&self) -> Scheduling {
        self.scheduling
    }

    /// Run every chunk through the mapper and wait for all results
    pub async fn execute(&self, chunks: Vec<Chunk>) -> Result<Vec<WordCounts>> {
        let total = chunks.len();
        info!(
            "Executing map phase with {} chunks (scheduling: {})",
            total, self.scheduling
        );
        let start = Instant::now();

        let partials = match self.scheduling {
            Scheduling::Threads { workers } => self.execute_threaded(chunks, workers).await?,
            Scheduling::Cooperative => self.execute_cooperative(chunks).await?,
        };

        debug_assert_eq!(partials.len(), total);
        info!(
            "Map phase completed: {} chunks in {:.3}s",
            partials.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(partials)
    }

    async fn execute_threaded(&self, chunks: Vec<Chunk>, workers: usize) -> Result<Vec<WordCounts>> {
        if workers == 0 {
            return Err(WordFreqError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "workers must be greater than 0",
            ));
        }

        let total = chunks.len();
        // More permits than chunks buys nothing, and Semaphore caps its permits
        let semaphore = Arc::new(Semaphore::new(workers.min(total.max(1))));
        let mut futures = FuturesUnordered::new();

        for chunk in chunks {
            let permit = semaphore.clone().acquire_owned().await.map_err(|e| {
                WordFreqError::map_task_with_code(
                    ErrorCode::MAP_SEMAPHORE_CLOSED,
                    "worker pool closed",
                    chunk.index,
                )
                .with_source(e)
            })?;
            let mapper = self.mapper.clone();
            let index = chunk.index;

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                mapper.map_chunk(&chunk)
            });
            futures.push(async move { (index, handle.await) });
        }

        let mut partials = Vec::with_capacity(total);
        while let Some((index, joined)) = futures.next().await {
            let result = joined.map_err(|e| {
                WordFreqError::map_task_with_code(
                    ErrorCode::MAP_TASK_PANICKED,
                    "counting task panicked",
                    index,
                )
                .with_source(e)
            });
            partials.push(collect_partial(index, result.and_then(|r| r))?);
        }

        Ok(partials)
    }

    async fn execute_cooperative(&self, chunks: Vec<Chunk>) -> Result<Vec<WordCounts>> {
        let tasks = chunks.into_iter().map(|chunk| {
            let mapper = self.mapper.clone();
            async move {
                tokio::task::yield_now().await;
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| mapper.map_chunk(&chunk)))
                    .unwrap_or_else(|_| {
                        Err(WordFreqError::map_task_with_code(
                            ErrorCode::MAP_TASK_PANICKED,
                            "counting task panicked",
                            chunk.index,
                        ))
                    });
                (chunk.index, outcome)
            }
        });

        join_all(tasks)
            .await
            .into_iter()
            .map(|(index, outcome)| collect_partial(index, outcome))
            .collect()
    }
}

/// Unwrap one task's outcome, turning any failure into a map task error
fn collect_partial(index: usize, outcome: Result<WordCounts>) -> Result<WordCounts> {
    match outcome {
        Ok(counts) => {
            debug!(
                "Chunk {} counted: {} distinct words, {} total",
                index,
                counts.len(),
                counts.total()
            );
            Ok(counts)
        }
        Err(e @ WordFreqError::MapTask { .. }) => {
            error!("Chunk {} failed: {}", index, e);
            Err(e)
        }
        Err(e) => {
            error!("Chunk {} failed: {}", index, e);
            Err(WordFreqError::map_task_with_code(
                ErrorCode::MAP_TASK_FAILED,
                format!("chunk {} could not be counted", index),
                index,
            )
            .with_source(e))
        }
    }
}
