use super::{ErrorCode, WordFreqError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to WordFreqError with context
    fn to_wordfreq(self, context: impl Into<String>) -> Result<T, WordFreqError>;

    fn to_config_error(self, code: u16, message: impl Into<String>) -> Result<T, WordFreqError>;

    /// Convert to a retrieval error naming the source that failed
    fn to_retrieval_error(
        self,
        code: u16,
        message: impl Into<String>,
        source_name: &str,
    ) -> Result<T, WordFreqError>;

    fn to_storage_error(self, message: impl Into<String>, path: &Path)
        -> Result<T, WordFreqError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_wordfreq(self, context: impl Into<String>) -> Result<T, WordFreqError> {
        self.map_err(|e| WordFreqError::other(context).with_source(e))
    }

    fn to_config_error(self, code: u16, message: impl Into<String>) -> Result<T, WordFreqError> {
        self.map_err(|e| WordFreqError::config_with_code(code, message).with_source(e))
    }

    fn to_retrieval_error(
        self,
        code: u16,
        message: impl Into<String>,
        source_name: &str,
    ) -> Result<T, WordFreqError> {
        self.map_err(|e| {
            WordFreqError::retrieval_with_code(code, message, Some(source_name.to_string()))
                .with_source(e)
        })
    }

    fn to_storage_error(
        self,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, WordFreqError> {
        self.map_err(|e| {
            WordFreqError::storage_with_code(
                ErrorCode::STORAGE_IO_ERROR,
                message,
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })
    }
}
