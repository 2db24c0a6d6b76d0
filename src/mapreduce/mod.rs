//! MapReduce word counting
//!
//! The text is split into chunks ([`pure::planning`]), each chunk is counted
//! by a concurrent map task ([`map_phase`]), the partial counts are folded into
//! one global count ([`pure::aggregation`]) and the most frequent words are
//! selected ([`pure::ranking`]). [`pipeline`] wires the phases together.

pub mod aggregation;
pub mod map_phase;
pub mod pipeline;
pub mod pure;
pub mod types;

pub use aggregation::{FormatType, FrequencyReport, OutputFormatter, PipelineStats};
pub use map_phase::{ChunkMapper, MapPhaseExecutor, Scheduling, WordCountMapper};
pub use pipeline::{PipelineSettings, WordFrequencyPipeline};
pub use pure::ChunkBoundary;
pub use types::{Chunk, RankedEntry, WordCounts};
