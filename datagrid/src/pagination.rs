//! Page arithmetic over the view.

use std::ops::Range;

/// Splits a view into fixed-size pages. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Pagination {
    /// Create a pagination with the given page size (at least one row).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `len` rows. An empty view has one (empty)
    /// page.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The page containing row `index`.
    pub fn page_of(&self, index: usize) -> usize {
        index / self.page_size
    }

    /// Clamp `page` to the pages that exist for `len` rows.
    pub fn clamp_page(&self, page: usize, len: usize) -> usize {
        page.min(self.page_count(len) - 1)
    }

    /// Row range of `page`, truncated to `len` rows.
    pub fn page_range(&self, page: usize, len: usize) -> Range<usize> {
        let start = page.saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }
}
