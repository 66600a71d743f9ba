// Pager state - computes the visible slice of the listing

/// Derived slice bounds for the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
    pub start: usize,
    pub end: usize,
    pub page_count: usize,
}

impl PageBounds {
    /// Number of visible rows on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn bounds(&self, total: usize) -> PageBounds {
        let page_count = total.div_ceil(self.page_size);
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        PageBounds {
            start,
            end,
            page_count,
        }
    }

    /// Advance one page. Past the last page this is a no-op.
    pub fn next(&mut self, total: usize) -> bool {
        if self.page + 1 < self.bounds(total).page_count {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one page. Before page 0 this is a no-op.
    pub fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Directory changes always start over at page 0.
    pub fn reset(&mut self) {
        self.page = 0;
    }
}
