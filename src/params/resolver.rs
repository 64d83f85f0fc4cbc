//! Page parameter resolution
//!
//! Each [`ParamSource`] adapts one calling convention. The resolver walks
//! them in order and takes the first value present, separately for the
//! page size and the current page.

use super::types::{LegacyParams, PageFields, PageRequest};
use crate::types::{DEFAULT_CURRENT_PAGE, DEFAULT_PAGE_SIZE};

/// One place page parameters can come from
pub trait ParamSource {
    /// Short name used in trace output
    fn name(&self) -> &'static str;

    /// Page size offered by this source
    fn page_size(&self) -> Option<u32>;

    /// Current page offered by this source
    fn current_page(&self) -> Option<u32>;
}

// ============================================================================
// Adapters
// ============================================================================

/// Request accessor methods
pub struct AccessorSource<'a> {
    request: &'a dyn PageRequest,
}

impl<'a> AccessorSource<'a> {
    pub fn new(request: &'a dyn PageRequest) -> Self {
        Self { request }
    }
}

impl ParamSource for AccessorSource<'_> {
    fn name(&self) -> &'static str {
        "accessor"
    }

    fn page_size(&self) -> Option<u32> {
        self.request.page_size()
    }

    fn current_page(&self) -> Option<u32> {
        self.request.current_page()
    }
}

/// Request public fields
pub struct FieldSource {
    fields: PageFields,
}

impl FieldSource {
    pub fn new(request: &dyn PageRequest) -> Self {
        Self {
            fields: request.fields(),
        }
    }
}

impl ParamSource for FieldSource {
    fn name(&self) -> &'static str {
        "field"
    }

    fn page_size(&self) -> Option<u32> {
        self.fields.page_size
    }

    fn current_page(&self) -> Option<u32> {
        self.fields.current_page
    }
}

/// Handler-level legacy fields
pub struct LegacySource {
    legacy: LegacyParams,
}

impl LegacySource {
    pub fn new(legacy: LegacyParams) -> Self {
        Self { legacy }
    }
}

impl ParamSource for LegacySource {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn page_size(&self) -> Option<u32> {
        self.legacy.page_size
    }

    fn current_page(&self) -> Option<u32> {
        self.legacy.current_page
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Effective page parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedParams {
    /// Items per page
    pub page_size: u32,
    /// Page number, 1-based
    pub current_page: u32,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: DEFAULT_CURRENT_PAGE,
        }
    }
}

/// Ordered chain of parameter sources
#[derive(Default)]
pub struct ParamResolver<'a> {
    sources: Vec<Box<dyn ParamSource + 'a>>,
}

impl<'a> ParamResolver<'a> {
    /// Create an empty resolver (resolves to the defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard chain: accessors, fields, legacy fields
    pub fn standard(request: Option<&'a dyn PageRequest>, legacy: LegacyParams) -> Self {
        let mut resolver = Self::new();
        if let Some(request) = request {
            resolver = resolver
                .with_source(AccessorSource::new(request))
                .with_source(FieldSource::new(request));
        }
        resolver.with_source(LegacySource::new(legacy))
    }

    /// Append a source with lower precedence than the existing ones
    pub fn with_source(mut self, source: impl ParamSource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Number of sources in the chain
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if the chain has no sources
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve page size and current page independently
    pub fn resolve(&self) -> ResolvedParams {
        let page_size = self
            .first(|source| source.page_size(), "page_size")
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let current_page = self
            .first(|source| source.current_page(), "current_page")
            .unwrap_or(DEFAULT_CURRENT_PAGE);

        ResolvedParams {
            page_size,
            current_page,
        }
    }

    fn first<F>(&self, get: F, param: &'static str) -> Option<u32>
    where
        F: Fn(&dyn ParamSource) -> Option<u32>,
    {
        self.sources.iter().find_map(|source| {
            let value = get(source.as_ref())?;
            tracing::trace!(param, source = source.name(), value, "Resolved page parameter");
            Some(value)
        })
    }
}
