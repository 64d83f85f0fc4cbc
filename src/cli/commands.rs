//! CLI commands and argument parsing

use crate::types::{MAX_CURRENT_PAGE, MAX_PAGE_SIZE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate SQL queries into `{list, pagination}` envelopes
#[derive(Parser, Debug)]
#[command(name = "rpc-paginator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Handler configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// DuckDB database file (overrides database.path from the config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of a query
    List {
        /// SELECT statement to paginate
        #[arg(long)]
        sql: String,

        /// Items per page
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)))]
        page_size: Option<u32>,

        /// Page number (1-based)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CURRENT_PAGE)))]
        current_page: Option<u32>,

        /// Primary key of the last item already seen
        #[arg(long)]
        last_id: Option<i64>,

        /// Query returning the total in its first column, replacing COUNT(*)
        #[arg(long)]
        count_sql: Option<String>,
    },

    /// Print the envelope of an empty result
    Empty {
        /// Items per page
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)))]
        page_size: Option<u32>,

        /// Page number (1-based)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CURRENT_PAGE)))]
        current_page: Option<u32>,
    },

    /// Show the effective configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
