//! Subcommand handlers

pub mod count;
pub mod sort_files;

pub use count::run_count;
pub use sort_files::run_sort_files;
