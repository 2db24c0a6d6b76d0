//! Application configuration
//!
//! Process-level settings derived from the command line, as opposed to
//! [`crate::config::WordFreqConfig`] which configures the pipeline.

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Filter directive from the config file, used when not verbose
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            log_level: None,
        }
    }

    /// Use `level` as the filter when no `-v` flag is given
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        self.log_level = level;
        self
    }

    /// Get the log filter directive based on verbosity
    pub fn log_level(&self) -> String {
        match self.verbose {
            0 => self
                .log_level
                .clone()
                .unwrap_or_else(|| "info".to_string()),
            1 => "debug".to_string(),
            2 => "trace".to_string(),
            _ => "trace,hyper=debug,reqwest=debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(AppConfig::new(0).log_level(), "info");
        assert_eq!(AppConfig::new(1).log_level(), "debug");
        assert_eq!(AppConfig::new(2).log_level(), "trace");
        assert!(AppConfig::new(3).log_level().starts_with("trace"));
    }

    #[test]
    fn test_configured_level_used_only_without_flags() {
        let quiet = AppConfig::new(0).with_log_level(Some("warn,wordfreq=debug".into()));
        assert_eq!(quiet.log_level(), "warn,wordfreq=debug");

        let loud = AppConfig::new(2).with_log_level(Some("warn".into()));
        assert_eq!(loud.log_level(), "trace");
    }
}
