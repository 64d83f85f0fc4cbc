//! CLI module
//!
//! Command-line interface for paginating SQL queries.
//!
//! # Commands
//!
//! - `list` - Fetch one page of a query as an envelope
//! - `empty` - Print the envelope of an empty result
//! - `config` - Show the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
