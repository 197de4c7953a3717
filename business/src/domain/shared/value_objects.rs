use serde::{Deserialize, Serialize};

/// Zero-based page request.
///
/// The size is not capped here; callers exposing pagination decide on limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Number of records skipped before this page.
    pub fn skip(&self) -> usize {
        self.number.saturating_mul(self.size)
    }

    pub fn take(&self) -> usize {
        self.size
    }
}

/// One page of records plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: Page,
    pub total: u64,
}

impl<T> PagedResult<T> {
    pub fn total_pages(&self) -> u64 {
        if self.page.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page.size as u64)
    }

    pub fn has_next(&self) -> bool {
        ((self.page.number as u64) + 1) < self.total_pages()
    }
}
