use std::ops::Range;

/// Current page of the watchlist table. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1) }
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Same page size, page pulled back into `1..=max(1, total_pages)`.
    pub fn clamped(self, len: usize) -> Self {
        let last = self.total_pages(len).max(1);
        Self { page: self.page.clamp(1, last), ..self }
    }

    /// Slice of the watchlist shown on this page.
    pub fn range(&self, len: usize) -> Range<usize> {
        let page = self.clamped(len).page;
        let start = ((page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next(self, len: usize) -> Self {
        Self { page: self.page + 1, ..self }.clamped(len)
    }

    pub fn prev(self, len: usize) -> Self {
        Self { page: self.page.saturating_sub(1), ..self }.clamped(len)
    }

    /// `"11 – 20 of 23"`; an empty list reads `"0 – 0 of 0"`.
    pub fn range_label(&self, len: usize) -> String {
        let range = self.range(len);
        let first = if range.is_empty() { range.start } else { range.start + 1 };
        format!("{} – {} of {}", first, range.end, len)
    }

    /// `"2 of 3 pages"`.
    pub fn pages_label(&self, len: usize) -> String {
        let page = self.clamped(len).page;
        format!("{} of {} pages", page, self.total_pages(len).max(1))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
