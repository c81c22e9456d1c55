//! Page window metadata for paginated collections.

use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::error::ItemsError;

/// Page size used when a collection is created without explicit configuration.
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageInfo")]
/// Current page window over the visible items of a collection.
///
/// `total` mirrors the number of visible items and is only ever updated by the owning
/// collection. `page_index` is kept inside `0..pages()` by every constructor and transition.
pub struct PageInfo {
    page_size: usize,
    page_index: usize,
    total: usize,
}

#[derive(Deserialize)]
struct RawPageInfo {
    page_size: usize,
    #[serde(default)]
    page_index: usize,
    #[serde(default)]
    total: usize,
}

impl TryFrom<RawPageInfo> for PageInfo {
    type Error = ItemsError;

    fn try_from(raw: RawPageInfo) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.page_size)?
            .with_total(raw.total)
            .goto(raw.page_index))
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
            total: 0,
        }
    }
}

impl PageInfo {
    /// Creates an empty page window with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidPageSize`] when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, ItemsError> {
        Self::default().with_page_size(page_size)
    }

    /// Number of items per page.
    pub fn page_size(self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page.
    pub fn page_index(self) -> usize {
        self.page_index
    }

    /// Number of visible items across all pages.
    pub fn total(self) -> usize {
        self.total
    }

    /// Number of pages, at least one even when there are no items.
    pub fn pages(self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// One-based inclusive display range of the current page.
    ///
    /// An empty collection yields `1..=0`, which is empty and never equal to a valid range.
    pub fn range(self) -> RangeInclusive<usize> {
        let window = self.window();
        if window.is_empty() {
            return 1..=0;
        }
        (window.start + 1)..=window.end
    }

    /// Zero-based slice bounds of the current page, clipped to `total`.
    pub fn window(self) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        start..end
    }

    /// Whether the current page is the first one.
    pub fn first_page(self) -> bool {
        self.page_index == 0
    }

    /// Whether the current page is the last one.
    pub fn last_page(self) -> bool {
        self.page_index + 1 == self.pages()
    }

    /// Moves to `page_index`, clamped into `0..pages()`.
    pub fn goto(self, page_index: usize) -> Self {
        Self {
            page_index: page_index.min(self.pages() - 1),
            ..self
        }
    }

    /// Moves to the first page.
    pub fn goto_first(self) -> Self {
        self.goto(0)
    }

    /// Moves to the last page.
    pub fn goto_last(self) -> Self {
        self.goto(self.pages() - 1)
    }

    /// Moves one page forward, staying on the last page.
    pub fn next_page(self) -> Self {
        self.goto(self.page_index.saturating_add(1))
    }

    /// Moves one page back, staying on the first page.
    pub fn previous_page(self) -> Self {
        self.goto(self.page_index.saturating_sub(1))
    }

    /// Replaces the page size and clamps the page index into the new page count.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidPageSize`] when `page_size` is zero.
    pub fn with_page_size(self, page_size: usize) -> Result<Self, ItemsError> {
        if page_size == 0 {
            return Err(ItemsError::InvalidPageSize(page_size));
        }
        Ok(Self { page_size, ..self }.goto(self.page_index))
    }

    pub(crate) fn with_total(self, total: usize) -> Self {
        Self { total, ..self }.goto(self.page_index)
    }
}
