use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

/// The unified error type for wordfreq
#[derive(Error, Debug)]
pub enum WordFreqError {
    #[error("[E{code:04}] Retrieval failed: {message}")]
    Retrieval {
        code: u16,
        message: String,
        source_name: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Chunking failed: {message}")]
    Chunking {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Map task failed: {message}")]
    MapTask {
        code: u16,
        message: String,
        chunk_index: Option<usize>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Empty result: {message}")]
    EmptyResult { code: u16, message: String },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Storage error: {message}")]
    Storage {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl WordFreqError {
    /// Create a retrieval error with specific code and the source it came from
    pub fn retrieval_with_code(
        code: u16,
        message: impl Into<String>,
        source_name: Option<String>,
    ) -> Self {
        Self::Retrieval {
            code,
            message: message.into(),
            source_name,
            source: None,
        }
    }

    /// Create a chunking error with specific code
    pub fn chunking_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Chunking {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a map task error for a specific chunk
    pub fn map_task_with_code(code: u16, message: impl Into<String>, chunk_index: usize) -> Self {
        Self::MapTask {
            code,
            message: message.into(),
            chunk_index: Some(chunk_index),
            source: None,
        }
    }

    /// Create an empty result error
    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::EmptyResult {
            code: ErrorCode::EMPTY_RESULT,
            message: message.into(),
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with specific code and path
    pub fn storage_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Storage {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error. `EmptyResult` carries no source and is returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let boxed = source.into();
        match &mut self {
            Self::Retrieval { source, .. }
            | Self::Chunking { source, .. }
            | Self::MapTask { source, .. }
            | Self::Config { source, .. }
            | Self::Storage { source, .. }
            | Self::Other { source, .. } => {
                *source = Some(boxed);
            }
            Self::EmptyResult { .. } => {}
        }
        self
    }

    /// Append context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Retrieval { message, .. }
            | Self::Chunking { message, .. }
            | Self::MapTask { message, .. }
            | Self::EmptyResult { message, .. }
            | Self::Config { message, .. }
            | Self::Storage { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Retrieval { .. } => 3,
            Self::Chunking { .. } => 4,
            Self::MapTask { .. } => 5,
            Self::EmptyResult { .. } => 6,
            Self::Storage { .. } => 7,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Retrieval { code, .. }
            | Self::Chunking { code, .. }
            | Self::MapTask { code, .. }
            | Self::EmptyResult { code, .. }
            | Self::Config { code, .. }
            | Self::Storage { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Errors that mean "there was nothing to analyze" rather than a crash
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::Retrieval { .. } | Self::EmptyResult { .. })
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Retrieval {
                message,
                source_name,
                ..
            } => {
                if let Some(name) = source_name {
                    format!("No data to show: could not retrieve text from {}: {}", name, message)
                } else {
                    format!("No data to show: could not retrieve text: {}", message)
                }
            }
            Self::EmptyResult { message, .. } => format!("No data to show: {}", message),
            Self::Chunking { message, .. } => format!("Could not split the text: {}", message),
            Self::MapTask {
                message,
                chunk_index,
                ..
            } => {
                if let Some(index) = chunk_index {
                    format!("Counting failed on chunk {}: {}", index, message)
                } else {
                    format!("Counting failed: {}", message)
                }
            }
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Storage { message, path, .. } => {
                if let Some(p) = path {
                    format!("Storage error at {}: {}", p.display(), message)
                } else {
                    format!("Storage error: {}", message)
                }
            }
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut out = format!(
            "{:#}\n  code: E{:04} ({})",
            self,
            self.code(),
            describe_error_code(self.code())
        );
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            out.push_str(&format!("\n  caused by: {}", cause));
            current = cause.source();
        }
        out
    }
}

impl From<std::io::Error> for WordFreqError {
    fn from(err: std::io::Error) -> Self {
        WordFreqError::storage_with_code(ErrorCode::STORAGE_IO_ERROR, err.to_string(), None)
            .with_source(err)
    }
}

/// Type alias for Results using WordFreqError
pub type Result<T> = std::result::Result<T, WordFreqError>;
