//! Output formatting for word-frequency reports
//!
//! This module renders a [`FrequencyReport`] as a terminal bar chart, JSON,
//! Markdown or CSV.

use super::FrequencyReport;
use crate::error::{ErrorCode, Result, WordFreqError};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Default width in columns of the longest bar
pub const DEFAULT_BAR_WIDTH: usize = 50;

const NO_DATA: &str = "No data to show";

/// Format type for output presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FormatType {
    /// Horizontal bar chart
    #[default]
    Text,
    /// JSON format
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Markdown table format
    Markdown,
    /// CSV format
    Csv,
}

/// Output formatter for frequency reports
pub struct OutputFormatter {
    format_type: FormatType,
    bar_width: usize,
}

impl OutputFormatter {
    /// Create a new formatter with the specified format type
    pub fn new(format_type: FormatType) -> Self {
        Self {
            format_type,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Set the width of the longest bar in text output
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// Format a report according to the configured format type
    ///
    /// An empty report renders as "No data to show" in text and markdown.
    /// JSON and CSV keep their shape: an empty `rankings` array, or just the
    /// header row.
    pub fn format(&self, report: &FrequencyReport) -> Result<String> {
        match self.format_type {
            FormatType::Text => Ok(self.format_text(report)),
            FormatType::Json => self.format_json(report, false),
            FormatType::JsonPretty => self.format_json(report, true),
            FormatType::Markdown => Ok(self.format_markdown(report)),
            FormatType::Csv => self.format_csv(report),
        }
    }

    /// Format as a bar chart, the longest bar belonging to the top word
    fn format_text(&self, report: &FrequencyReport) -> String {
        if report.is_empty() {
            return format!("{}\n", NO_DATA);
        }

        let mut output = String::new();
        let max_count = report.rankings[0].count.max(1);
        let word_width = report
            .rankings
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0);
        let count_width = max_count.to_string().len();

        writeln!(
            &mut output,
            "Top {} Most Frequently Used Words",
            report.top_n
        )
        .unwrap();
        writeln!(&mut output).unwrap();

        for entry in &report.rankings {
            let bar_len =
                ((entry.count as f64 / max_count as f64) * self.bar_width as f64).round() as usize;
            writeln!(
                &mut output,
                "{:<word_width$}  {:>count_width$}  {}",
                entry.word,
                entry.count,
                "#".repeat(bar_len.max(1)),
            )
            .unwrap();
        }

        writeln!(&mut output).unwrap();
        writeln!(
            &mut output,
            "{} words, {} distinct, {} chunks, {:.3}s",
            report.stats.total_words,
            report.stats.distinct_words,
            report.stats.chunks,
            report.stats.duration_secs
        )
        .unwrap();

        output
    }

    /// Format as JSON
    fn format_json(&self, report: &FrequencyReport, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| {
            WordFreqError::storage_with_code(
                ErrorCode::STORAGE_SERIALIZATION_ERROR,
                "failed to serialize report",
                None,
            )
            .with_source(e)
        })
    }

    /// Format as Markdown table
    fn format_markdown(&self, report: &FrequencyReport) -> String {
        let mut output = String::new();

        writeln!(
            &mut output,
            "## Top {} Most Frequently Used Words\n",
            report.top_n
        )
        .unwrap();

        if report.is_empty() {
            writeln!(&mut output, "_{}_", NO_DATA).unwrap();
            return output;
        }

        writeln!(&mut output, "| Rank | Word | Count |").unwrap();
        writeln!(&mut output, "|------|------|-------|").unwrap();
        for (rank, entry) in report.rankings.iter().enumerate() {
            writeln!(
                &mut output,
                "| {} | {} | {} |",
                rank + 1,
                entry.word,
                entry.count
            )
            .unwrap();
        }

        output
    }

    /// Format as CSV
    fn format_csv(&self, report: &FrequencyReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let csv_error = |e: csv::Error| {
            WordFreqError::storage_with_code(
                ErrorCode::STORAGE_SERIALIZATION_ERROR,
                "failed to write CSV",
                None,
            )
            .with_source(e)
        };

        writer
            .write_record(["rank", "word", "count"])
            .map_err(csv_error)?;
        for (rank, entry) in report.rankings.iter().enumerate() {
            writer
                .write_record([
                    (rank + 1).to_string(),
                    entry.word.clone(),
                    entry.count.to_string(),
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer.into_inner().map_err(|e| {
            WordFreqError::storage_with_code(
                ErrorCode::STORAGE_SERIALIZATION_ERROR,
                "failed to flush CSV",
                None,
            )
            .with_source(e.into_error())
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
