//! Sort files into directories by extension
//!
//! Walks a source tree and copies every file into `<output>/<extension>`.
//! Copies run concurrently and fail independently: a file that cannot be
//! copied is logged and recorded, and the rest carry on.

use crate::error::{ErrorCode, ErrorExt, Result, WordFreqError};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// A file that could not be copied
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CopyFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a sort run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortReport {
    pub copied: usize,
    pub failed: Vec<CopyFailure>,
    /// Files copied per extension; `""` for files without one
    pub by_extension: BTreeMap<String, usize>,
}

impl SortReport {
    pub fn total(&self) -> usize {
        self.copied + self.failed.len()
    }
}

/// Copies files from a source tree into per-extension directories
pub struct FileSorter {
    source: PathBuf,
    output: PathBuf,
    max_parallel: usize,
    show_progress: bool,
}

impl FileSorter {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            max_parallel: crate::config::DEFAULT_MAX_PARALLEL_COPIES,
            show_progress: false,
        }
    }

    /// Limit the number of copies in flight
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel;
        self
    }

    /// Draw a progress bar on stderr
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn run(&self) -> Result<SortReport> {
        if self.max_parallel == 0 {
            return Err(WordFreqError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "max_parallel must be greater than 0",
            ));
        }
        if !self.source.is_dir() {
            return Err(WordFreqError::storage_with_code(
                ErrorCode::STORAGE_NOT_FOUND,
                "source directory does not exist",
                Some(self.source.clone()),
            ));
        }

        fs::create_dir_all(&self.output)
            .await
            .to_storage_error("failed to create output directory", &self.output)?;

        let files = self.collect_files().await?;
        let total = files.len();
        if total == 0 {
            info!("No files to sort in {}", self.source.display());
            return Ok(SortReport::default());
        }
        info!(
            "Sorting {} files from {} into {}",
            total,
            self.source.display(),
            self.output.display()
        );

        let progress = if self.show_progress {
            create_progress_bar(total)
        } else {
            ProgressBar::hidden()
        };

        let semaphore = Arc::new(Semaphore::new(self.max_parallel.min(total)));
        let output = Arc::new(self.output.clone());

        let futures = files.into_iter().map(|path| {
            let semaphore = semaphore.clone();
            let output = output.clone();
            let progress = progress.clone();
            async move {
                let outcome = async {
                    let _permit = semaphore.acquire().await.to_wordfreq("copy pool closed")?;
                    copy_file(&path, &output).await
                }
                .await;
                progress.inc(1);
                (path, outcome)
            }
        });

        let mut report = SortReport::default();
        for (path, outcome) in join_all(futures).await {
            match outcome {
                Ok(extension) => {
                    report.copied += 1;
                    *report.by_extension.entry(extension).or_insert(0) += 1;
                }
                Err(e) => {
                    error!("Error copying file {}: {}", path.display(), e);
                    report.failed.push(CopyFailure {
                        path,
                        error: e.user_message(),
                    });
                }
            }
        }

        progress.finish_with_message(format!(
            "Completed: {} copied, {} failed",
            report.copied,
            report.failed.len()
        ));
        info!(
            "Sort completed: {} total, {} copied, {} failed",
            report.total(),
            report.copied,
            report.failed.len()
        );

        Ok(report)
    }

    /// Every regular file under the source, skipping the output directory
    async fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let source = self.source.clone();
        let output = self.output.clone();

        tokio::task::spawn_blocking(move || {
            let output = output.canonicalize().unwrap_or(output);
            let root = source.canonicalize().unwrap_or(source);

            let mut files = Vec::new();
            let walker = WalkDir::new(&root)
                .follow_links(false)
                .into_iter()
                .filter_entry(|entry| entry.path() != output);

            for entry in walker {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                    Ok(_) => {}
                    Err(e) => warn!("Skipping unreadable entry: {}", e),
                }
            }
            debug!("Found {} files under {}", files.len(), root.display());
            files
        })
        .await
        .to_wordfreq("directory walk failed")
    }
}

/// Destination directory name for `path`: its extension without the dot,
/// or `""` when it has none
pub fn extension_dir(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Copy one file into its extension directory, returning the extension
async fn copy_file(path: &Path, output: &Path) -> Result<String> {
    let extension = extension_dir(path);
    let target_dir = output.join(&extension);
    let file_name = path.file_name().ok_or_else(|| {
        WordFreqError::storage_with_code(
            ErrorCode::STORAGE_NOT_FOUND,
            "path has no file name",
            Some(path.to_path_buf()),
        )
    })?;

    fs::create_dir_all(&target_dir)
        .await
        .to_storage_error("failed to create directory", &target_dir)?;
    fs::copy(path, target_dir.join(file_name))
        .await
        .to_storage_error("failed to copy file", path)?;

    info!(
        "File {} copied to {}",
        file_name.to_string_lossy(),
        target_dir.display()
    );
    Ok(extension)
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}
