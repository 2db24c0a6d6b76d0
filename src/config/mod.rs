use crate::error::{ErrorCode, ErrorExt, Result, WordFreqError};
use crate::mapreduce::aggregation::formatter::DEFAULT_BAR_WIDTH;
use crate::mapreduce::map_phase::default_workers;
use crate::mapreduce::pure::{DEFAULT_CHUNK_COUNT, DEFAULT_TOP_N};
use crate::mapreduce::{ChunkBoundary, FormatType, PipelineSettings, Scheduling};
use crate::source::http::{DEFAULT_TIMEOUT, DEFAULT_URL};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub mod loader;

pub use loader::ConfigLoader;

/// Default number of concurrent copies in the file sorter
pub const DEFAULT_MAX_PARALLEL_COPIES: usize = 16;

/// Get the default location of the user configuration file
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "wordfreq", "wordfreq")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WordFreqConfig {
    pub log_level: Option<String>,
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub sorter: SorterConfig,
}

/// How map tasks are scheduled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingMode {
    #[default]
    Threads,
    Cooperative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub chunks: usize,
    pub top_n: usize,
    pub boundary: ChunkBoundary,
    pub scheduling: SchedulingMode,
    /// Worker threads; defaults to available parallelism
    pub workers: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunks: DEFAULT_CHUNK_COUNT,
            top_n: DEFAULT_TOP_N,
            boundary: ChunkBoundary::Character,
            scheduling: SchedulingMode::Threads,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: FormatType,
    pub bar_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: FormatType::Text,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SorterConfig {
    pub max_parallel: usize,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            max_parallel: DEFAULT_MAX_PARALLEL_COPIES,
        }
    }
}

impl WordFreqConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .to_config_error(ErrorCode::CONFIG_PARSE_ERROR, "failed to parse configuration")
    }

    /// Apply `WORDFREQ_*` environment overrides
    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(chunks) = lookup("WORDFREQ_CHUNKS").and_then(|v| v.parse().ok()) {
            self.pipeline.chunks = chunks;
        }

        if let Some(top_n) = lookup("WORDFREQ_TOP_N").and_then(|v| v.parse().ok()) {
            self.pipeline.top_n = top_n;
        }

        if let Some(workers) = lookup("WORDFREQ_WORKERS").and_then(|v| v.parse().ok()) {
            self.pipeline.workers = Some(workers);
        }

        if let Some(url) = lookup("WORDFREQ_URL") {
            self.source.url = url;
        }

        if let Some(log_level) = lookup("WORDFREQ_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| -> Result<()> {
            Err(WordFreqError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                message,
            ))
        };

        if self.pipeline.chunks == 0 {
            return invalid("pipeline.chunks must be greater than 0");
        }
        if self.pipeline.workers == Some(0) {
            return invalid("pipeline.workers must be greater than 0");
        }
        if self.sorter.max_parallel == 0 {
            return invalid("sorter.max_parallel must be greater than 0");
        }
        if self.output.bar_width == 0 {
            return invalid("output.bar_width must be greater than 0");
        }
        Ok(())
    }

    pub fn scheduling(&self) -> Scheduling {
        match self.pipeline.scheduling {
            SchedulingMode::Threads => Scheduling::Threads {
                workers: self.pipeline.workers.unwrap_or_else(default_workers),
            },
            SchedulingMode::Cooperative => Scheduling::Cooperative,
        }
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            chunk_count: self.pipeline.chunks,
            top_n: self.pipeline.top_n,
            boundary: self.pipeline.boundary,
            scheduling: self.scheduling(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = WordFreqConfig::default();
        assert_eq!(config.pipeline.chunks, 10);
        assert_eq!(config.pipeline.top_n, 10);
        assert_eq!(config.pipeline.boundary, ChunkBoundary::Character);
        assert_eq!(config.source.url, DEFAULT_URL);
        assert_eq!(config.source.timeout, Duration::from_secs(30));
        assert_eq!(config.output.format, FormatType::Text);
        assert_eq!(config.sorter.max_parallel, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
log_level = "debug"

[pipeline]
chunks = 4
top_n = 25
boundary = "word"
scheduling = "cooperative"

[source]
url = "https://example.com/book.txt"
timeout = "5s"

[output]
format = "json-pretty"
bar_width = 20

[sorter]
max_parallel = 3
"#;

        let config = WordFreqConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.pipeline.chunks, 4);
        assert_eq!(config.pipeline.top_n, 25);
        assert_eq!(config.pipeline.boundary, ChunkBoundary::Word);
        assert_eq!(config.scheduling(), Scheduling::Cooperative);
        assert_eq!(config.source.url, "https://example.com/book.txt");
        assert_eq!(config.source.timeout, Duration::from_secs(5));
        assert_eq!(config.output.format, FormatType::JsonPretty);
        assert_eq!(config.output.bar_width, 20);
        assert_eq!(config.sorter.max_parallel, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = WordFreqConfig::from_toml("[pipeline]\ntop_n = 3\n").unwrap();
        assert_eq!(config.pipeline.top_n, 3);
        assert_eq!(config.pipeline.chunks, 10);
        assert_eq!(config.source.url, DEFAULT_URL);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = WordFreqConfig::from_toml("[pipeline\nchunks = ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WORDFREQ_CHUNKS", "7"),
            ("WORDFREQ_TOP_N", "3"),
            ("WORDFREQ_WORKERS", "2"),
            ("WORDFREQ_URL", "http://localhost/x.txt"),
            ("WORDFREQ_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = WordFreqConfig::default();
        config.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.pipeline.chunks, 7);
        assert_eq!(config.pipeline.top_n, 3);
        assert_eq!(config.scheduling(), Scheduling::Threads { workers: 2 });
        assert_eq!(config.source.url, "http://localhost/x.txt");
        assert_eq!(config.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_unparseable_env_values_ignored() {
        let mut config = WordFreqConfig::default();
        config.merge_vars(|key| (key == "WORDFREQ_CHUNKS").then(|| "many".to_string()));
        assert_eq!(config.pipeline.chunks, 10);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = WordFreqConfig::default();
        config.pipeline.chunks = 0;
        assert!(config.validate().is_err());

        let mut config = WordFreqConfig::default();
        config.pipeline.workers = Some(0);
        assert!(config.validate().is_err());

        let mut config = WordFreqConfig::default();
        config.sorter.max_parallel = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }

    #[test]
    fn test_pipeline_settings() {
        let mut config = WordFreqConfig::default();
        config.pipeline.workers = Some(6);
        let settings = config.pipeline_settings();
        assert_eq!(settings.chunk_count, 10);
        assert_eq!(settings.scheduling, Scheduling::Threads { workers: 6 });
    }
}
