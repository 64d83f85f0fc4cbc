//! Common types used throughout rpc-paginator
//!
//! This module contains shared type definitions, type aliases,
//! and page parameter constants used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Page Parameter Defaults
// ============================================================================

/// Page size used when no request, field or handler default supplies one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page number used when no request, field or handler default supplies one
pub const DEFAULT_CURRENT_PAGE: u32 = 1;

/// Largest page size accepted at the command-line boundary
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Largest page number accepted at the command-line boundary
pub const MAX_CURRENT_PAGE: u32 = 1000;

// ============================================================================
// Wire Keys
// ============================================================================

/// Parameter object key for the page size
pub const PAGE_SIZE_KEY: &str = "pageSize";

/// Parameter object key for the current page
pub const CURRENT_PAGE_KEY: &str = "currentPage";

/// Parameter object key for the last seen primary key
pub const LAST_ID_KEY: &str = "lastId";
