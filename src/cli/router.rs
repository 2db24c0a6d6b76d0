//! Command routing and execution

use crate::cli::args::Commands;
use crate::cli::commands::{run_count, run_sort_files};
use crate::config::WordFreqConfig;
use anyhow::Result;

/// Execute a CLI command with the resolved configuration
pub async fn execute_command(command: Commands, config: &WordFreqConfig) -> Result<()> {
    match command {
        Commands::Count(args) => run_count(args, config).await,
        Commands::SortFiles {
            input,
            output,
            max_parallel,
            progress,
        } => run_sort_files(input, output, max_parallel, progress, config).await,
    }
}
