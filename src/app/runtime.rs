//! Runtime initialization

use crate::app::{config::AppConfig, logging::init_logging};
use crate::config::{ConfigLoader, WordFreqConfig};
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Resolve configuration and install the logging subscriber
///
/// The config file is read first because it may carry the log level.
pub async fn initialize_app(verbose: u8, config_path: Option<PathBuf>) -> Result<WordFreqConfig> {
    let loaded = ConfigLoader::new(config_path).load().await;

    // Log at the requested verbosity even when the config is broken
    let log_level = loaded.as_ref().ok().and_then(|c| c.log_level.clone());
    init_logging(&AppConfig::new(verbose).with_log_level(log_level));

    let config = loaded?;
    config.validate()?;
    debug!("Resolved configuration: {:?}", config);

    Ok(config)
}
