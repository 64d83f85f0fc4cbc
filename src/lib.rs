// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # rpc-paginator
//!
//! Pagination helper for list handlers. Give it a data source, a page
//! request and an item formatter; get back a normalized envelope:
//!
//! ```json
//! {
//!   "list": [{"id": 1}, {"id": 2}],
//!   "pagination": {"current": 1, "pageSize": 10, "total": 25, "hasMore": true}
//! }
//! ```
//!
//! ## Features
//!
//! - **Layered parameters**: request accessors, request fields, handler fields, defaults
//! - **Page size hook**: per-handler policy (cap, fixed, custom closure)
//! - **Flexible formatters**: one record, an expanded sequence, or nothing
//! - **Total override**: supply your own counter when the backend total is wrong
//! - **Backends**: in-memory slices and DuckDB SQL queries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rpc_paginator::backend::DuckDbBackend;
//! use rpc_paginator::pagination::{Formatted, Paginator};
//! use rpc_paginator::params::PageParams;
//!
//! let backend = DuckDbBackend::open("shop.duckdb")?;
//! let paginator = Paginator::new(backend).with_page_size_hook(|size| size.min(100));
//!
//! let request = PageParams::new(20, 2);
//! let result = paginator.fetch_list(
//!     "SELECT id, name FROM products ORDER BY id",
//!     |row| Formatted::from_value(row.clone()),
//!     None,
//!     Some(&request),
//! )?;
//!
//! println!("{}", serde_json::to_string(&result)?);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Paginator                           │
//! │   fetch_list(source, formatter, counter?, request?)          │
//! │   empty_list(request?)                                       │
//! └──────────────────────────────────────────────────────────────┘
//!          │                    │                     │
//! ┌────────┴────────┐ ┌─────────┴────────┐ ┌──────────┴─────────┐
//! │     Params      │ │  Page Size Hook  │ │    PageBackend     │
//! ├─────────────────┤ ├──────────────────┤ ├────────────────────┤
//! │ Accessors       │ │ Identity         │ │ MemoryBackend      │
//! │ Fields          │ │ Cap / Fixed      │ │ DuckDbBackend      │
//! │ Handler fields  │ │ Closure          │ │ (your own)         │
//! │ Defaults        │ │                  │ │                    │
//! └─────────────────┘ └──────────────────┘ └────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and constants
pub mod types;

/// Page parameter resolution
pub mod params;

/// List orchestration and envelope types
pub mod pagination;

/// Paging backends
pub mod backend;

/// YAML configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, PagerConfig};
pub use pagination::{Formatted, ListResult, Page, PageBackend, PaginationInfo, Paginator};
pub use params::{LegacyParams, PageFields, PageParams, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
