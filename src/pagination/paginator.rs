//! List orchestration
//!
//! Drives a [`PageBackend`] for one list call and assembles the envelope.

use super::types::{
    identity_hook, Formatted, ListResult, Page, PageSizeHook, PageSizePolicy, PaginationInfo,
};
use crate::error::Result;
use crate::params::{LegacyParams, PageRequest, ParamResolver, ResolvedParams};
use std::fmt;
use std::sync::Arc;

/// Slices a data source into pages
pub trait PageBackend {
    /// Data source token, passed through untouched
    type Source: ?Sized;
    /// Raw item type
    type Item;

    /// Fetch page `page` (1-based) holding up to `page_size` items
    fn paginate(
        &self,
        source: &Self::Source,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Self::Item>>;
}

impl<B: PageBackend + ?Sized> PageBackend for &B {
    type Source = B::Source;
    type Item = B::Item;

    fn paginate(
        &self,
        source: &Self::Source,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Self::Item>> {
        (**self).paginate(source, page, page_size)
    }
}

/// Pagination helper for list handlers
///
/// Holds the backend plus the two per-handler hooks: the handler's own page
/// fields and the page size hook.
///
/// # Example
///
/// ```rust,ignore
/// use rpc_paginator::backend::MemoryBackend;
/// use rpc_paginator::pagination::{Formatted, Paginator};
/// use rpc_paginator::params::PageParams;
///
/// let paginator = Paginator::new(MemoryBackend::new());
/// let users = vec!["ada", "grace", "linus"];
///
/// let result = paginator.fetch_list(
///     users.as_slice(),
///     |name| Formatted::Record(name.to_uppercase()),
///     None,
///     Some(&PageParams::new(2, 1)),
/// )?;
/// assert!(result.pagination.has_more);
/// ```
pub struct Paginator<B> {
    backend: B,
    legacy: LegacyParams,
    page_size_hook: PageSizeHook,
}

impl<B: PageBackend> Paginator<B> {
    /// Create a paginator with no handler fields and an identity hook
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            legacy: LegacyParams::default(),
            page_size_hook: identity_hook(),
        }
    }

    /// Set the handler's own page fields
    pub fn with_legacy_params(mut self, legacy: LegacyParams) -> Self {
        self.legacy = legacy;
        self
    }

    /// Replace the page size hook
    pub fn with_page_size_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(u32) -> u32 + Send + Sync + 'static,
    {
        self.page_size_hook = Arc::new(hook);
        self
    }

    /// Replace the page size hook with a declarative policy
    pub fn with_page_size_policy(mut self, policy: PageSizePolicy) -> Self {
        self.page_size_hook = policy.into_hook();
        self
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the handler's page fields
    pub fn legacy_params(&self) -> LegacyParams {
        self.legacy
    }

    /// Mutable access to the handler's page fields
    pub fn legacy_params_mut(&mut self) -> &mut LegacyParams {
        &mut self.legacy
    }

    /// Resolve page size and current page for a request
    pub fn resolve_params(&self, request: Option<&dyn PageRequest>) -> ResolvedParams {
        ParamResolver::standard(request, self.legacy).resolve()
    }

    /// Page size actually sent to the backend for a resolved page size
    pub fn effective_page_size(&self, page_size: u32) -> u32 {
        (self.page_size_hook)(page_size)
    }

    /// Fetch one page and format it into an envelope
    ///
    /// The formatter maps each raw item to a [`Formatted`] value; records are
    /// appended, sequences are flattened in order and ignored results are
    /// left out. When `counter` is given its value replaces the backend total.
    pub fn fetch_list<R, F>(
        &self,
        source: &B::Source,
        mut formatter: F,
        counter: Option<&dyn Fn(&B::Source, &Page<B::Item>) -> Result<u64>>,
        request: Option<&dyn PageRequest>,
    ) -> Result<ListResult<R>>
    where
        F: FnMut(&B::Item) -> Formatted<R>,
    {
        self.try_fetch_list(source, |item| Ok(formatter(item)), counter, request)
    }

    /// Same as [`fetch_list`](Self::fetch_list) with a fallible formatter
    ///
    /// The first formatter error aborts the call and is returned unchanged.
    pub fn try_fetch_list<R, F>(
        &self,
        source: &B::Source,
        mut formatter: F,
        counter: Option<&dyn Fn(&B::Source, &Page<B::Item>) -> Result<u64>>,
        request: Option<&dyn PageRequest>,
    ) -> Result<ListResult<R>>
    where
        F: FnMut(&B::Item) -> Result<Formatted<R>>,
    {
        let resolved = self.resolve_params(request);
        let page_size = self.effective_page_size(resolved.page_size);

        tracing::debug!(
            current_page = resolved.current_page,
            requested_page_size = resolved.page_size,
            page_size,
            "Fetching page"
        );

        let page = self
            .backend
            .paginate(source, resolved.current_page, page_size)?;

        tracing::debug!(
            current_page = page.current_page_number,
            page_size = page.item_number_per_page,
            total = page.total_item_count,
            items = page.len(),
            "Backend returned page"
        );

        let mut list = Vec::with_capacity(page.len());
        for item in &page {
            let formatted = formatter(item)?;
            if formatted.is_ignored() {
                tracing::trace!("Formatter result ignored");
            }
            formatted.append_to(&mut list);
        }

        let total = match counter {
            Some(count) => count(source, &page)?,
            None => page.total_item_count,
        };

        Ok(ListResult::new(
            list,
            PaginationInfo::new(page.current_page_number, page.item_number_per_page, total),
        ))
    }

    /// Envelope for a result already known to be empty
    ///
    /// Resolves the page parameters like [`fetch_list`](Self::fetch_list)
    /// but neither applies the page size hook nor calls the backend.
    pub fn empty_list<R>(&self, request: Option<&dyn PageRequest>) -> ListResult<R> {
        let resolved = self.resolve_params(request);
        ListResult::empty(resolved.current_page, resolved.page_size)
    }
}

impl<B: fmt::Debug> fmt::Debug for Paginator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("backend", &self.backend)
            .field("legacy", &self.legacy)
            .finish_non_exhaustive()
    }
}
