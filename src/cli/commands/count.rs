//! `wordfreq count`

use crate::cli::args::CountArgs;
use crate::config::WordFreqConfig;
use crate::mapreduce::{
    ChunkBoundary, OutputFormatter, PipelineSettings, Scheduling, WordFrequencyPipeline,
};
use crate::source::{FileTextSource, HttpTextSource, StaticTextSource, TextSource};
use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

pub async fn run_count(args: CountArgs, config: &WordFreqConfig) -> Result<()> {
    let settings = pipeline_settings(&args, config);
    debug!("Pipeline settings: {:?}", settings);

    let source = build_source(&args, config).await?;
    let pipeline = WordFrequencyPipeline::new(settings);
    let report = pipeline.run_source(source.as_ref()).await?;

    info!(
        "Counted {} words ({} distinct) in {:.3}s",
        report.stats.total_words, report.stats.distinct_words, report.stats.duration_secs
    );

    let formatter = OutputFormatter::new(args.format.unwrap_or(config.output.format))
        .with_bar_width(config.output.bar_width);
    let rendered = formatter.format(&report)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Configured settings with command-line overrides applied
fn pipeline_settings(args: &CountArgs, config: &WordFreqConfig) -> PipelineSettings {
    let mut settings = config.pipeline_settings();

    if let Some(chunks) = args.chunks {
        settings.chunk_count = chunks;
    }
    if let Some(top) = args.top {
        settings.top_n = top;
    }
    if args.word_boundaries {
        settings.boundary = ChunkBoundary::Word;
    }
    if args.cooperative {
        settings.scheduling = Scheduling::Cooperative;
    } else if let Some(workers) = args.workers {
        settings.scheduling = Scheduling::Threads { workers };
    }

    settings
}

async fn build_source(args: &CountArgs, config: &WordFreqConfig) -> Result<Box<dyn TextSource>> {
    if args.stdin {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .context("Failed to read standard input")?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        return Ok(Box::new(StaticTextSource::new(text).with_label("stdin")));
    }

    if let Some(path) = &args.file {
        return Ok(Box::new(FileTextSource::new(path)));
    }

    let url = args.url.as_deref().unwrap_or(&config.source.url);
    Ok(Box::new(HttpTextSource::new(url, config.source.timeout)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_to_config() {
        let mut config = WordFreqConfig::default();
        config.pipeline.chunks = 6;
        config.pipeline.workers = Some(3);

        let settings = pipeline_settings(&CountArgs::default(), &config);
        assert_eq!(settings.chunk_count, 6);
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.boundary, ChunkBoundary::Character);
        assert_eq!(settings.scheduling, Scheduling::Threads { workers: 3 });
    }

    #[test]
    fn test_flags_override_config() {
        let args = CountArgs {
            chunks: Some(2),
            top: Some(5),
            word_boundaries: true,
            cooperative: true,
            ..Default::default()
        };
        let settings = pipeline_settings(&args, &WordFreqConfig::default());
        assert_eq!(settings.chunk_count, 2);
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.boundary, ChunkBoundary::Word);
        assert_eq!(settings.scheduling, Scheduling::Cooperative);
    }

    #[test]
    fn test_workers_flag() {
        let args = CountArgs {
            workers: Some(7),
            ..Default::default()
        };
        let settings = pipeline_settings(&args, &WordFreqConfig::default());
        assert_eq!(settings.scheduling, Scheduling::Threads { workers: 7 });
    }

    #[tokio::test]
    async fn test_file_source_selected() {
        let args = CountArgs {
            file: Some("book.txt".into()),
            ..Default::default()
        };
        let source = build_source(&args, &WordFreqConfig::default()).await.unwrap();
        assert_eq!(source.describe(), "book.txt");
    }

    #[tokio::test]
    async fn test_url_defaults_to_config() {
        let mut config = WordFreqConfig::default();
        config.source.url = "http://127.0.0.1:9/text".to_string();
        let source = build_source(&CountArgs::default(), &config).await.unwrap();
        assert_eq!(source.describe(), "http://127.0.0.1:9/text");
    }
}
