//! Page math and pagination window computation for the public post listing.

use serde::Serialize;

/// Fixed page size for the public post listing.
pub const POSTS_PER_PAGE: i64 = 6;

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    /// 1-based current page.
    pub page: i64,
    pub per_page: i64,
    /// Total matching rows across all pages.
    pub total: i64,
    pub total_pages: i64,
}

impl PageMeta {
    /// Build metadata for a page, clamping `total_pages` to at least 1 so an
    /// empty collection still has a well-defined first page.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = ((total + per_page - 1) / per_page).max(1);
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Row offset of this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// Clamp a raw `?page=` query value to a valid 1-based page number.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// One entry of the rendered pagination control strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    Page { number: i64 },
    Ellipsis,
}

/// Compute the pagination control window for `current` within `total_pages`.
///
/// Shows the first page, the last page, and `current` ± 1, with an ellipsis
/// wherever pages are skipped. Contiguous ranges never contain an ellipsis.
///
/// ```
/// use inkpot_core::pagination::{page_window, PageControl};
///
/// let window = page_window(5, 9);
/// // 1 … 4 5 6 … 9
/// assert_eq!(window.len(), 7);
/// assert_eq!(window[1], PageControl::Ellipsis);
/// ```
pub fn page_window(current: i64, total_pages: i64) -> Vec<PageControl> {
    let mut controls = Vec::new();
    let mut last_shown = 0;

    for page in 1..=total_pages.max(1) {
        let show = page == 1 || page == total_pages || (page - current).abs() <= 1;
        if !show {
            continue;
        }
        if page > last_shown + 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page { number: page });
        last_shown = page;
    }

    controls
}
