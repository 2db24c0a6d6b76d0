//! Logging configuration and initialization

use crate::app::config::AppConfig;
use tracing::{debug, trace, warn};
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the application
///
/// Logs go to stderr so that stdout carries only command output. Calling
/// this twice is harmless; the second subscriber is discarded.
pub fn init_logging(config: &AppConfig) {
    let directive = config.log_level();
    let (filter, bad_directive) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2)
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .try_init()
        .is_ok();

    if bad_directive {
        warn!("Invalid log level '{}', falling back to info", directive);
    }
    if installed {
        debug!("wordfreq started with verbosity level: {}", config.verbose);
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
