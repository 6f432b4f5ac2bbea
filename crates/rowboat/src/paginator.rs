//! Pagination engine: fixed-size pages over an ordered row set.
//!
//! Tracks the current page, recomputes the page count as the row set grows
//! or shrinks, and renders a compact page indicator. Navigation past either
//! boundary is rejected; an out-of-range page is clamped, never an error.
//!
//! # Example
//!
//! ```rust
//! use rowboat::paginator::Paginator;
//!
//! let items = vec![1, 2, 3, 4, 5, 6, 7];
//! let mut paginator = Paginator::new().per_page(3);
//! paginator.sync_total_items(items.len());
//!
//! let (start, end) = paginator.slice_bounds(items.len());
//! assert_eq!(&items[start..end], &[1, 2, 3]);
//!
//! paginator.next_page();
//! let (start, end) = paginator.slice_bounds(items.len());
//! assert_eq!(&items[start..end], &[4, 5, 6]);
//! ```

/// Page indicator display type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorType {
    /// Arabic numerals: "2/5".
    #[default]
    Arabic,
    /// Dot indicators: "○•○○○".
    Dots,
}

/// Pagination state over a row set.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Indicator display type.
    pub indicator_type: IndicatorType,
    /// Character for the current page in dots mode.
    pub active_dot: String,
    /// Character for other pages in dots mode.
    pub inactive_dot: String,
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a paginator with one item per page and a single page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indicator_type: IndicatorType::Arabic,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            page: 0,
            per_page: 1,
            total_pages: 1,
        }
    }

    /// Sets the page size (builder pattern). Clamped to at least 1.
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Sets the indicator type (builder pattern).
    #[must_use]
    pub fn indicator_type(mut self, t: IndicatorType) -> Self {
        self.indicator_type = t;
        self
    }

    /// Returns the current page (0-indexed).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the current page as displayed (1-indexed).
    #[must_use]
    pub const fn display_page(&self) -> usize {
        self.page + 1
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get_per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the total number of pages. Always at least 1, even for an
    /// empty row set.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Sets the current page, clamping to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    /// Recomputes the page count from the item count and clamps the current
    /// page down if the set shrank underneath it.
    ///
    /// Returns the new page count.
    pub fn sync_total_items(&mut self, items: usize) -> usize {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        self.page = self.page.min(self.total_pages - 1);
        self.total_pages
    }

    /// Returns start and end indices for slicing the row set to the current
    /// page.
    #[must_use]
    pub const fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = self.page * self.per_page;
        let end = start + self.per_page;
        if start > length {
            (length, length)
        } else if end > length {
            (start, length)
        } else {
            (start, end)
        }
    }

    /// Returns the number of items on the current page.
    #[must_use]
    pub const fn items_on_page(&self, length: usize) -> usize {
        let (start, end) = self.slice_bounds(length);
        end - start
    }

    /// Navigates to the previous page; rejected on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Navigates to the next page; rejected on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns whether the current page is the first.
    #[must_use]
    pub const fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns whether the current page is the last.
    #[must_use]
    pub const fn on_last_page(&self) -> bool {
        self.page + 1 == self.total_pages
    }

    /// Renders the page indicator.
    #[must_use]
    pub fn view(&self) -> String {
        match self.indicator_type {
            IndicatorType::Dots => self.dots_view(),
            IndicatorType::Arabic => format!("{}/{}", self.display_page(), self.total_pages),
        }
    }

    fn dots_view(&self) -> String {
        let mut s = String::new();
        for i in 0..self.total_pages {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginator_new() {
        let p = Paginator::new();
        assert_eq!(p.page(), 0);
        assert_eq!(p.display_page(), 1);
        assert_eq!(p.get_per_page(), 1);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn test_per_page_clamps_to_one() {
        let p = Paginator::new().per_page(0);
        assert_eq!(p.get_per_page(), 1);
    }

    #[test]
    fn test_sync_total_items() {
        let mut p = Paginator::new().per_page(10);
        assert_eq!(p.sync_total_items(25), 3);
        assert_eq!(p.sync_total_items(20), 2);
        // Empty sets still expose one (empty) page.
        assert_eq!(p.sync_total_items(0), 1);
    }

    #[test]
    fn test_shrinking_set_clamps_page_down() {
        let mut p = Paginator::new().per_page(2);
        p.sync_total_items(10);
        p.set_page(4);
        assert_eq!(p.display_page(), 5);

        // Filtering narrowed the set; the dangling page clamps to the last.
        p.sync_total_items(3);
        assert_eq!(p.total_pages(), 2);
        assert_eq!(p.display_page(), 2);
    }

    #[test]
    fn test_navigation_rejects_boundaries() {
        let mut p = Paginator::new().per_page(2);
        p.sync_total_items(6);

        assert!(p.on_first_page());
        p.prev_page();
        assert_eq!(p.page(), 0);

        p.next_page();
        p.next_page();
        assert!(p.on_last_page());
        p.next_page();
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_slice_bounds_cover_all_items_without_overlap() {
        let mut p = Paginator::new().per_page(3);
        p.sync_total_items(10);

        let mut covered = Vec::new();
        for page in 0..p.total_pages() {
            p.set_page(page);
            let (start, end) = p.slice_bounds(10);
            covered.extend(start..end);
        }
        assert_eq!(covered, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_items_on_page() {
        let mut p = Paginator::new().per_page(3);
        p.sync_total_items(10);
        assert_eq!(p.items_on_page(10), 3);
        p.set_page(3);
        assert_eq!(p.items_on_page(10), 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut p = Paginator::new().per_page(5);
        p.sync_total_items(12);
        p.set_page(99);
        assert_eq!(p.display_page(), 3);
    }

    #[test]
    fn test_arabic_view() {
        let mut p = Paginator::new().per_page(2);
        p.sync_total_items(10);
        assert_eq!(p.view(), "1/5");
        p.next_page();
        assert_eq!(p.view(), "2/5");
    }

    #[test]
    fn test_dots_view() {
        let mut p = Paginator::new()
            .per_page(2)
            .indicator_type(IndicatorType::Dots);
        p.sync_total_items(10);
        assert_eq!(p.view(), "•○○○○");
        p.next_page();
        assert_eq!(p.view(), "○•○○○");
    }
}
