//! Pagination request shared by the store and service.

/// Default number of users per page.
pub const DEFAULT_PAGE_SIZE: i32 = 10;
/// Default 1-based page number.
pub const DEFAULT_PAGE_NUMBER: i32 = 1;

/// 1-based page selection.
///
/// Both fields are always `>= 1`; out-of-range input is clamped on
/// construction so the store never sees a negative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_size: u32,
    page_number: u32,
}

impl PageRequest {
    /// Builds a page request, clamping values below 1 up to 1.
    pub fn new(page_size: i32, page_number: i32) -> Self {
        Self {
            page_size: clamp_positive(page_size),
            page_number: clamp_positive(page_number),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size as usize
    }

    pub fn page_number(&self) -> usize {
        self.page_number as usize
    }

    /// Number of records to skip: `(page_number - 1) * page_size`.
    pub fn offset(&self) -> usize {
        (self.page_number() - 1).saturating_mul(self.page_size())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_NUMBER)
    }
}

fn clamp_positive(value: i32) -> u32 {
    value.max(1).unsigned_abs()
}
