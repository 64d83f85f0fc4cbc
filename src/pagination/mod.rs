//! Pagination module
//!
//! Turns one page from a backend into the `{list, pagination}` envelope.
//!
//! # Overview
//!
//! A [`Paginator`] resolves the page parameters, runs the page size hook,
//! asks its [`PageBackend`] for the page, formats every item and computes
//! `total` / `hasMore`:
//!
//! ```text
//! request ─▶ resolve ─▶ page size hook ─▶ backend.paginate ─▶ format ─▶ envelope
//! ```
//!
//! The serialized envelope looks like:
//!
//! ```json
//! {"list": [...], "pagination": {"current": 1, "pageSize": 10, "total": 25, "hasMore": true}}
//! ```

mod paginator;
mod types;

pub use paginator::{PageBackend, Paginator};
pub use types::{
    has_more, identity_hook, Formatted, ListResult, Page, PageSizeHook, PageSizePolicy,
    PaginationInfo,
};
