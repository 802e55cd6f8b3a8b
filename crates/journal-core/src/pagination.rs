//! Pagination utilities.
//!
//! Provides the page-window calculation used by pagination controls and a
//! small paging state holder that any view can own. Everything here is pure
//! data and knows nothing about rendering.

use serde::Serialize;
use std::ops::Range;

/// Number of pages shown directly, without any elision, by default.
pub const DEFAULT_MAX_DIRECT: usize = 5;

/// One rendered unit of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    /// A concrete, 1-based page number.
    Page(usize),
    /// One or more pages omitted here.
    Elision,
}

impl PageMarker {
    /// The page number, if this marker is a concrete page.
    pub fn page(self) -> Option<usize> {
        match self {
            PageMarker::Page(page) => Some(page),
            PageMarker::Elision => None,
        }
    }

    pub fn is_elision(self) -> bool {
        matches!(self, PageMarker::Elision)
    }
}

/// Number of pages needed for `item_count` items at `page_size` per page.
///
/// Never returns less than 1: an empty list still has an (empty) first page.
/// A `page_size` of 0 is treated as 1.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Compute the ordered markers of a pagination control.
///
/// When `total_pages <= max_direct` every page is listed. Otherwise the first
/// and last pages are always present and a three page window follows the
/// active page, pinned to `2..=4` near the start and to the last four pages
/// near the end. Elisions appear only where at least one page is hidden.
///
/// Out-of-range input is clamped: `total_pages` to at least 1 and
/// `active_page` into `1..=total_pages`.
///
/// # Example
///
/// ```
/// use journal_core::pagination::{compute_window, PageMarker::*};
///
/// assert_eq!(
///     compute_window(5, 10, 5),
///     vec![Page(1), Elision, Page(4), Page(5), Page(6), Elision, Page(10)]
/// );
/// ```
pub fn compute_window(active_page: usize, total_pages: usize, max_direct: usize) -> Vec<PageMarker> {
    let total = total_pages.max(1);
    let active = active_page.clamp(1, total);

    if total <= max_direct || total == 1 {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut start = active.saturating_sub(1).max(2);
    let mut end = (active + 1).min(total - 1);

    if active <= 3 {
        end = 4;
    }
    if active + 2 >= total {
        start = total.saturating_sub(3);
    }

    // Only matters for max_direct < 5, where the pins can overshoot.
    let start = start.max(2);
    let end = end.min(total - 1);

    let mut markers = Vec::with_capacity(end.saturating_sub(start) + 5);
    markers.push(PageMarker::Page(1));

    if start > 2 {
        markers.push(PageMarker::Elision);
    }

    markers.extend((start..=end).map(PageMarker::Page));

    if end < total - 1 {
        markers.push(PageMarker::Elision);
    }

    markers.push(PageMarker::Page(total));
    markers
}

/// Paging state for a list of items, owned by the parent view.
///
/// Pages are 1-based. The current page is always kept inside
/// `1..=total_pages()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    item_count: usize,
    page_size: usize,
    current_page: usize,
    max_direct: usize,
}

impl Paginator {
    /// Create a paginator on page 1. A `page_size` of 0 is treated as 1.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            item_count,
            page_size: page_size.max(1),
            current_page: 1,
            max_direct: DEFAULT_MAX_DIRECT,
        }
    }

    /// Override how many pages are listed before elisions kick in.
    pub fn with_max_direct(mut self, max_direct: usize) -> Self {
        self.max_direct = max_direct;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.page_size)
    }

    /// Jump to `page`, clamping into range. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        let changed = clamped != self.current_page;
        self.current_page = clamped;
        changed
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Advance one page. No-op on the last page.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.set_page(self.current_page + 1)
        } else {
            false
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.set_page(self.current_page - 1)
        } else {
            false
        }
    }

    pub fn first(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last(&mut self) -> bool {
        self.set_page(self.total_pages())
    }

    /// Half-open range of item indices on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    /// Borrow the items on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Markers to render for the current page.
    pub fn window(&self) -> Vec<PageMarker> {
        compute_window(self.current_page, self.total_pages(), self.max_direct)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, 1)
    }
}
