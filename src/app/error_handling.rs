//! Error handling utilities

use crate::error::WordFreqError;
use tracing::error;

/// Report a fatal error on stderr and exit with its status code
///
/// A [`WordFreqError`] prints its user message and exits with the
/// variant's code; with `-v` the developer message follows. Anything else
/// prints the error chain and exits with 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = if let Some(err) = error.downcast_ref::<WordFreqError>() {
        eprintln!("{}", err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", err.developer_message());
        }

        err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
