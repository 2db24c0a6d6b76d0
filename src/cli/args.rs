//! CLI argument structures

use crate::mapreduce::FormatType;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Count the most frequent words in a text with a parallel map-reduce
#[derive(Parser)]
#[command(name = "wordfreq")]
#[command(about = "wordfreq - Parallel word-frequency analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count word frequencies and print the top entries
    #[command(name = "count")]
    Count(CountArgs),

    /// Copy files from a directory tree into per-extension folders
    #[command(name = "sort-files")]
    SortFiles {
        /// Directory to read files from
        input: PathBuf,

        /// Directory to sort files into
        output: PathBuf,

        /// Maximum number of concurrent copies
        #[arg(long)]
        max_parallel: Option<usize>,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
#[command(group(ArgGroup::new("input").args(["url", "file", "stdin"])))]
pub struct CountArgs {
    /// Fetch the text from this URL (defaults to the configured URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Read the text from a local file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read the text from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Number of chunks to split the text into
    #[arg(short = 'k', long)]
    pub chunks: Option<usize>,

    /// Number of words to report
    #[arg(short = 'n', long = "top")]
    pub top: Option<usize>,

    /// Worker threads for the map phase
    #[arg(long, conflicts_with = "cooperative")]
    pub workers: Option<usize>,

    /// Run map tasks as cooperative tasks instead of threads
    #[arg(long)]
    pub cooperative: bool,

    /// Move chunk cuts to word ends so no word is split
    #[arg(long)]
    pub word_boundaries: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatType>,
}
