//! Application shell
//!
//! Everything the binary needs before and after running a command:
//! logging setup, configuration resolution and fatal error reporting.
//! The library modules never touch global state; this one does.

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use runtime::initialize_app;
