//! Command-line interface
//!
//! Argument parsing with clap derive, plus one handler per subcommand.

pub mod args;
pub mod commands;
pub mod router;

pub use args::{Cli, Commands, CountArgs};
pub use router::execute_command;
