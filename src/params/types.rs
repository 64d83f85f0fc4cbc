//! Page request types
//!
//! A page request can reach the paginator in several historical shapes:
//! request objects with accessor methods, plain parameter objects that only
//! expose fields, and handlers that carry the page fields themselves.

use crate::types::{
    JsonObject, JsonValue, CURRENT_PAGE_KEY, DEFAULT_CURRENT_PAGE, DEFAULT_PAGE_SIZE, LAST_ID_KEY,
    PAGE_SIZE_KEY,
};
use serde::{Deserialize, Serialize};

/// Capability set of a page request
///
/// Every method is optional. Accessors are consulted first, then the
/// exposed [`PageFields`]. A type that implements neither contributes
/// nothing and resolution falls through to the handler's legacy fields.
pub trait PageRequest {
    /// Accessor for the requested page size
    fn page_size(&self) -> Option<u32> {
        None
    }

    /// Accessor for the requested page number (1-based)
    fn current_page(&self) -> Option<u32> {
        None
    }

    /// Accessor for the primary key of the last item seen by the caller
    fn last_id(&self) -> Option<i64> {
        None
    }

    /// Public fields exposed by the request
    fn fields(&self) -> PageFields {
        PageFields::default()
    }
}

// ============================================================================
// Field-only request
// ============================================================================

/// Page fields as exposed by a parameter object
///
/// A missing field is `None`; that is different from a field holding the
/// default value, since a present field stops resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFields {
    /// Page size field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Current page field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Last seen id field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_id: Option<i64>,
}

impl PageFields {
    /// Create fields with page size and current page set
    pub fn new(page_size: u32, current_page: u32) -> Self {
        Self {
            page_size: Some(page_size),
            current_page: Some(current_page),
            last_id: None,
        }
    }

    /// Set the page size field
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the current page field
    pub fn with_current_page(mut self, current_page: u32) -> Self {
        self.current_page = Some(current_page);
        self
    }

    /// Set the last id field
    pub fn with_last_id(mut self, last_id: i64) -> Self {
        self.last_id = Some(last_id);
        self
    }
}

impl PageRequest for PageFields {
    fn fields(&self) -> PageFields {
        *self
    }
}

// ============================================================================
// Full request
// ============================================================================

/// Standard page request with both accessors and fields
///
/// Deserializes from `{"pageSize": 20, "currentPage": 2, "lastId": 99}`,
/// every key optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageParams {
    /// Items per page (intended range 1-2000)
    pub page_size: u32,
    /// Page number, 1-based (intended range 1-1000)
    pub current_page: u32,
    /// Primary key of the last item from the previous fetch
    pub last_id: Option<i64>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: DEFAULT_CURRENT_PAGE,
            last_id: None,
        }
    }
}

impl PageParams {
    /// Create a request for the given page
    pub fn new(page_size: u32, current_page: u32) -> Self {
        Self {
            page_size,
            current_page,
            last_id: None,
        }
    }

    /// Set the last seen id
    pub fn with_last_id(mut self, last_id: i64) -> Self {
        self.last_id = Some(last_id);
        self
    }
}

impl PageRequest for PageParams {
    fn page_size(&self) -> Option<u32> {
        Some(self.page_size)
    }

    fn current_page(&self) -> Option<u32> {
        Some(self.current_page)
    }

    fn last_id(&self) -> Option<i64> {
        self.last_id
    }

    fn fields(&self) -> PageFields {
        PageFields {
            page_size: Some(self.page_size),
            current_page: Some(self.current_page),
            last_id: self.last_id,
        }
    }
}

// Raw JSON-RPC params object: only fields, read by key.
impl PageRequest for JsonObject {
    fn fields(&self) -> PageFields {
        PageFields {
            page_size: self.get(PAGE_SIZE_KEY).and_then(json_u32),
            current_page: self.get(CURRENT_PAGE_KEY).and_then(json_u32),
            last_id: self.get(LAST_ID_KEY).and_then(JsonValue::as_i64),
        }
    }
}

fn json_u32(value: &JsonValue) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

// ============================================================================
// Handler fields
// ============================================================================

/// Page fields carried by the handler itself
///
/// Older handlers declared `pageSize` / `currentPage` directly instead of
/// accepting a separate request. They are consulted after the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyParams {
    /// Handler-level page size
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Handler-level current page
    #[serde(default)]
    pub current_page: Option<u32>,
}

impl LegacyParams {
    /// Create handler fields with both values set
    pub fn new(page_size: u32, current_page: u32) -> Self {
        Self {
            page_size: Some(page_size),
            current_page: Some(current_page),
        }
    }

    /// Check whether neither field is set
    pub fn is_empty(&self) -> bool {
        self.page_size.is_none() && self.current_page.is_none()
    }
}
