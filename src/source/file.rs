//! Local file text source

use super::{Retrieved, TextSource};
use crate::error::{ErrorCode, ErrorExt, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Reads the whole file; invalid UTF-8 is replaced rather than rejected
#[derive(Debug, Clone)]
pub struct FileTextSource {
    path: PathBuf,
}

impl FileTextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TextSource for FileTextSource {
    async fn fetch(&self) -> Result<Retrieved> {
        let bytes = fs::read(&self.path).await.to_retrieval_error(
            ErrorCode::RETRIEVAL_READ_FAILED,
            "failed to read file",
            &self.describe(),
        )?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "{} is not valid UTF-8, replacing invalid sequences",
                    self.path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(Retrieved::from_text(text))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
