/// Client-side pagination for the bookmark list

use std::ops::Range;

pub const PAGE_SIZE: usize = 10;

/// Viewports narrower than this get a one-page window
pub const NARROW_VIEWPORT_PX: f64 = 640.0;

/// One entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Pages needed for `len` items; never less than one
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Index range covered by `page` (1-based).
///
/// The page number is not validated; a page past the end gives an empty
/// range rather than an out-of-bounds slice.
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(end);
    start..end
}

/// Half-width of the window around the current page
pub fn window_for_width(viewport_width: f64) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX { 1 } else { 3 }
}

/// Page numbers to display, collapsing distant runs into ellipses.
///
/// Short lists show every page. Otherwise the strip is the first page, a
/// window of `window` pages each side of `current` (clamped to the interior)
/// and the last page. An ellipsis stands in for each gap between the window
/// and the first or last page, and only when that gap hides a page.
pub fn page_numbers(total: usize, current: usize, window: usize) -> Vec<PageItem> {
    if total <= 5 + window {
        return (1..=total).map(PageItem::Page).collect();
    }

    let start = current.saturating_sub(window).max(2);
    let end = (current + window).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));

    items
}

/// Current page plus navigation that clamps to `[1, total]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub total: usize,
}

impl Pager {
    pub fn new(current: usize, item_count: usize) -> Pager {
        Pager {
            current,
            total: total_pages(item_count),
        }
    }

    pub fn prev(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> usize {
        (self.current + 1).min(self.total)
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Target of a click on a strip entry; ellipses go nowhere
    pub fn go(&self, item: PageItem) -> Option<usize> {
        match item {
            PageItem::Page(page) => Some(page),
            PageItem::Ellipsis => None,
        }
    }

    /// The current page pulled back inside `[1, total]`
    pub fn clamped(&self) -> usize {
        self.current.clamp(1, self.total)
    }
}
