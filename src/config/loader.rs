use super::{default_config_path, WordFreqConfig};
use crate::error::{ErrorCode, ErrorExt, Result, WordFreqError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolves the configuration: defaults, then file, then environment
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    use_env: bool,
}

impl ConfigLoader {
    /// Load from `path` when given, else from the user config file if it exists
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            explicit_path: path,
            use_env: true,
        }
    }

    /// Skip `WORDFREQ_*` environment overrides
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub async fn load(&self) -> Result<WordFreqConfig> {
        let mut config = match &self.explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(WordFreqError::config_with_code(
                        ErrorCode::CONFIG_NOT_FOUND,
                        format!("Configuration file not found: {}", path.display()),
                    ));
                }
                Self::load_file(path).await?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path).await?,
                _ => {
                    debug!("No configuration file found, using defaults");
                    WordFreqConfig::default()
                }
            },
        };

        if self.use_env {
            config.merge_env_vars();
        }

        Ok(config)
    }

    async fn load_file(path: &Path) -> Result<WordFreqConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).await.to_config_error(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Failed to read {}", path.display()),
        )?;
        WordFreqConfig::from_toml(&content).map_err(|e| e.with_context(path.display()))
    }
}
