//! Derived pagination values. Nothing here is stored in state.

use crate::PageSize;

/// Maximum number of page buttons shown at once.
pub const WINDOW_WIDTH: u32 = 5;

/// Inclusive, 1-based range of items shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemRange {
    pub start: u64,
    pub end: u64,
}

/// A pagination control target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
    Number(u32),
}

impl PageTarget {
    /// Resolves the target against the current page, clamped to `[1, total_pages]`.
    pub fn resolve(self, current: u32, total_pages: u32) -> u32 {
        let total_pages = total_pages.max(1);
        let requested = match self {
            PageTarget::First => 1,
            PageTarget::Previous => current.saturating_sub(1),
            PageTarget::Next => current.saturating_add(1),
            PageTarget::Last => total_pages,
            PageTarget::Number(page) => page,
        };
        requested.clamp(1, total_pages)
    }
}

/// `ceil(total_count / page_size)`, never less than 1.
pub fn total_pages(total_count: u64, page_size: PageSize) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size.get()));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Range of items displayed on `page`.
///
/// The end is bounded by the page size, the total, and the number of items the
/// server actually returned, whichever is smallest.
pub fn item_range(page: u32, page_size: PageSize, total_count: u64, returned: usize) -> ItemRange {
    if returned == 0 || total_count == 0 {
        return ItemRange::default();
    }
    let size = u64::from(page_size.get());
    let start = u64::from(page.max(1) - 1) * size + 1;
    if start > total_count {
        return ItemRange::default();
    }
    let end = (start + size - 1)
        .min(total_count)
        .min(start + returned as u64 - 1);
    ItemRange { start, end }
}

/// Contiguous window of at most [`WINDOW_WIDTH`] pages centred on `page`.
pub fn pagination_window(page: u32, total_pages: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    let page = page.clamp(1, total_pages);
    let span = WINDOW_WIDTH - 1;

    let mut start = page.saturating_sub(2).max(1);
    let end = start.saturating_add(span).min(total_pages);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }
    (start..=end).collect()
}
