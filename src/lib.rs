//! # wordfreq
//!
//! Parallel word-frequency analysis: split a text into chunks, count words
//! in each chunk concurrently, merge the partial counts and report the most
//! frequent words.
//!
//! ## Usage
//!
//! ```bash
//! wordfreq count --file book.txt -k 8 -n 20
//! wordfreq sort-files ./downloads ./sorted
//! ```
//!
//! ## Modules
//!
//! - `mapreduce` - Chunk planning, the concurrent map phase, reduction and ranking
//! - `source` - Where the text comes from (HTTP, file, memory)
//! - `sorter` - Copies a directory tree into per-extension folders
//! - `config` - TOML configuration with environment overrides
//! - `error` - The crate error type and its code registry
//! - `cli` / `app` - The `wordfreq` binary's argument parsing and process setup
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod mapreduce;
pub mod sorter;
pub mod source;
