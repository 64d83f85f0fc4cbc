//! Page parameter module
//!
//! Resolves the effective page size and current page for a list call.
//!
//! # Precedence
//!
//! For each of the two values independently, the first present source wins:
//!
//! 1. request accessor methods ([`PageRequest::page_size`], [`PageRequest::current_page`])
//! 2. request public fields ([`PageRequest::fields`])
//! 3. fields on the handler itself ([`LegacyParams`])
//! 4. defaults (page size 10, page 1)
//!
//! Nothing is clamped or validated here.

mod resolver;
mod types;

pub use resolver::{
    AccessorSource, FieldSource, LegacySource, ParamResolver, ParamSource, ResolvedParams,
};
pub use types::{LegacyParams, PageFields, PageParams, PageRequest};
