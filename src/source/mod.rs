//! Text sources
//!
//! The pipeline receives its text through the [`TextSource`] trait. A source
//! either yields text or reports that there was nothing to fetch; only real
//! failures (network errors, unreadable files) are errors.

pub mod file;
pub mod http;

pub use file::FileTextSource;
pub use http::{HttpTextSource, DEFAULT_URL};

use crate::error::Result;
use async_trait::async_trait;

/// Outcome of a successful retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retrieved {
    Text(String),
    /// The source answered but had nothing to analyze
    NoContent { reason: String },
}

impl Retrieved {
    /// Wrap `text`, mapping an empty string to `NoContent`
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            Self::NoContent {
                reason: "source is empty".to_string(),
            }
        } else {
            Self::Text(text)
        }
    }
}

#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch(&self) -> Result<Retrieved>;

    /// Human-readable name of the source for logs and messages
    fn describe(&self) -> String;
}

/// Text held in memory, e.g. read from stdin
#[derive(Debug, Clone)]
pub struct StaticTextSource {
    text: String,
    label: String,
}

impl StaticTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: "in-memory text".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[async_trait]
impl TextSource for StaticTextSource {
    async fn fetch(&self) -> Result<Retrieved> {
        Ok(Retrieved::from_text(self.text.clone()))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
