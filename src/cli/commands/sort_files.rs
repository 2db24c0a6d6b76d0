//! `wordfreq sort-files`

use crate::config::WordFreqConfig;
use crate::sorter::FileSorter;
use anyhow::Result;
use std::path::PathBuf;

/// Sort `input` into `output` and print a summary
///
/// Individual copy failures are reported but do not fail the command.
pub async fn run_sort_files(
    input: PathBuf,
    output: PathBuf,
    max_parallel: Option<usize>,
    progress: bool,
    config: &WordFreqConfig,
) -> Result<()> {
    let report = FileSorter::new(&input, &output)
        .with_max_parallel(max_parallel.unwrap_or(config.sorter.max_parallel))
        .with_progress(progress)
        .run()
        .await?;

    println!(
        "Sorted {} files into {} ({} failed)",
        report.copied,
        output.display(),
        report.failed.len()
    );
    for (extension, count) in &report.by_extension {
        let label = if extension.is_empty() {
            "(no extension)"
        } else {
            extension.as_str()
        };
        println!("  {label}: {count}");
    }
    for failure in &report.failed {
        eprintln!("  failed: {} ({})", failure.path.display(), failure.error);
    }

    Ok(())
}
