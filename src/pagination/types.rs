//! Pagination types
//!
//! Defines the page handed back by a backend, the formatter result shape and
//! the `{list, pagination}` envelope returned to callers.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::JsonValue;

// ============================================================================
// Backend Page
// ============================================================================

/// One page of raw items as executed by a backend
#[derive(Debug, Clone, PartialEq)]
pub struct Page<I> {
    /// Page number the backend used
    pub current_page_number: u32,
    /// Page size the backend used
    pub item_number_per_page: u32,
    /// Total number of items across all pages
    pub total_item_count: u64,
    /// Items of this page, in backend order
    pub items: Vec<I>,
}

impl<I> Page<I> {
    /// Create a page
    pub fn new(
        items: Vec<I>,
        current_page_number: u32,
        item_number_per_page: u32,
        total_item_count: u64,
    ) -> Self {
        Self {
            current_page_number,
            item_number_per_page,
            total_item_count,
            items,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }
}

impl<'a, I> IntoIterator for &'a Page<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// Formatter Output
// ============================================================================

/// What a formatter produced for one raw item
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted<R> {
    /// One output record
    Record(R),
    /// Zero or more output records, kept in order
    Sequence(Vec<R>),
    /// Nothing; the item is left out of the list
    Ignored,
}

impl<R> Formatted<R> {
    /// Expand into a sequence from any iterator
    pub fn sequence(records: impl IntoIterator<Item = R>) -> Self {
        Self::Sequence(records.into_iter().collect())
    }

    /// Check if this result is dropped
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Number of records this result contributes
    pub fn len(&self) -> usize {
        match self {
            Self::Record(_) => 1,
            Self::Sequence(records) => records.len(),
            Self::Ignored => 0,
        }
    }

    /// Check if this result contributes no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the records to a list
    pub fn append_to(self, list: &mut Vec<R>) {
        match self {
            Self::Record(record) => list.push(record),
            Self::Sequence(records) => list.extend(records),
            Self::Ignored => {}
        }
    }
}

impl<R> From<Vec<R>> for Formatted<R> {
    fn from(records: Vec<R>) -> Self {
        Self::Sequence(records)
    }
}

impl<R> From<Option<R>> for Formatted<R> {
    fn from(record: Option<R>) -> Self {
        record.map_or(Self::Ignored, Self::Record)
    }
}

impl Formatted<JsonValue> {
    /// Classify a JSON formatter result
    ///
    /// Objects are records, arrays expand element by element and every
    /// other value (null, strings, numbers, booleans) is dropped.
    pub fn from_value(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(_) => Self::Record(value),
            JsonValue::Array(values) => Self::Sequence(values),
            _ => Self::Ignored,
        }
    }
}

impl From<JsonValue> for Formatted<JsonValue> {
    fn from(value: JsonValue) -> Self {
        Self::from_value(value)
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Pagination block of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Page number used
    pub current: u32,
    /// Page size used
    pub page_size: u32,
    /// Total number of items
    pub total: u64,
    /// Whether pages after this one hold items
    pub has_more: bool,
}

impl PaginationInfo {
    /// Build pagination info, deriving `has_more`
    pub fn new(current: u32, page_size: u32, total: u64) -> Self {
        Self {
            current,
            page_size,
            total,
            has_more: has_more(current, page_size, total),
        }
    }

    /// Pagination info for a result known to be empty
    pub fn empty(current: u32, page_size: u32) -> Self {
        Self {
            current,
            page_size,
            total: 0,
            has_more: false,
        }
    }
}

/// `current * page_size < total`, computed without overflow
pub fn has_more(current: u32, page_size: u32, total: u64) -> bool {
    u64::from(current) * u64::from(page_size) < total
}

/// The `{list, pagination}` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<R> {
    /// Formatted items
    pub list: Vec<R>,
    /// Page metadata
    pub pagination: PaginationInfo,
}

impl<R> ListResult<R> {
    /// Create an envelope
    pub fn new(list: Vec<R>, pagination: PaginationInfo) -> Self {
        Self { list, pagination }
    }

    /// Empty envelope for the given page
    pub fn empty(current: u32, page_size: u32) -> Self {
        Self {
            list: Vec::new(),
            pagination: PaginationInfo::empty(current, page_size),
        }
    }

    /// Check if the list holds no items
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

// ============================================================================
// Page Size Hook
// ============================================================================

/// Maps the resolved page size to the one sent to the backend
pub type PageSizeHook = Arc<dyn Fn(u32) -> u32 + Send + Sync>;

/// Identity page size hook
pub fn identity_hook() -> PageSizeHook {
    Arc::new(|page_size| page_size)
}

/// Declarative page size hooks, as written in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageSizePolicy {
    /// Use the resolved page size unchanged
    #[default]
    Identity,

    /// Never exceed `max`
    Cap {
        /// Upper bound on the page size
        max: u32,
    },

    /// Always use `size`, whatever was requested
    Fixed {
        /// Page size to force
        size: u32,
    },
}

impl PageSizePolicy {
    /// Apply the policy to a resolved page size
    pub fn apply(&self, page_size: u32) -> u32 {
        match *self {
            Self::Identity => page_size,
            Self::Cap { max } => page_size.min(max),
            Self::Fixed { size } => size,
        }
    }

    /// Turn the policy into a page size hook
    pub fn into_hook(self) -> PageSizeHook {
        match self {
            Self::Identity => identity_hook(),
            policy => Arc::new(move |page_size| policy.apply(page_size)),
        }
    }
}
