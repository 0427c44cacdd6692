//! sentline CLI library
//!
//! This library provides the command-line interface for rewriting a text
//! file with one period-terminated segment per line.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
