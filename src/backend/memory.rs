//! In-memory backend
//!
//! Pages over a slice that is already loaded.

use crate::error::Result;
use crate::pagination::{Page, PageBackend};
use std::marker::PhantomData;

/// Slices `[T]` sources into pages
///
/// Page `n` of size `s` covers `[(n - 1) * s, n * s)`, clamped to the slice.
/// A page past the end is empty but still reports the full total. Page 0 is
/// read as page 1.
#[derive(Debug, Clone, Copy)]
pub struct MemoryBackend<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryBackend<T> {
    /// Create a backend
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for MemoryBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> PageBackend for MemoryBackend<T> {
    type Source = [T];
    type Item = T;

    fn paginate(&self, source: &[T], page: u32, page_size: u32) -> Result<Page<T>> {
        let page = page.max(1);
        let start = (page as usize - 1).saturating_mul(page_size as usize);
        let end = start.saturating_add(page_size as usize).min(source.len());

        let items = if start < end {
            source[start..end].to_vec()
        } else {
            Vec::new()
        };

        Ok(Page::new(items, page, page_size, source.len() as u64))
    }
}
