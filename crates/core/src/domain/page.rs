// Pagination Records

use serde::{Deserialize, Serialize};

/// Pagination window. Stores trust these values; `clamped` applies the
/// boundary rules callers are expected to enforce on raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: i64 = 10;
    pub const MAX_PER_PAGE: i64 = 100;

    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Normalize raw caller input: page >= 1, 1 <= per_page <= 100
    pub fn clamped(page: i64, per_page: i64) -> Self {
        let page = page.max(1);
        let per_page = if per_page < 1 {
            Self::DEFAULT_PER_PAGE
        } else {
            per_page.min(Self::MAX_PER_PAGE)
        };
        Self { page, per_page }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the full-table count, so callers can derive
/// total pages without a second round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self, per_page: i64) -> i64 {
        if per_page > 0 {
            (self.total_count + per_page - 1) / per_page
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_math() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
    }

    #[test]
    fn test_clamped_page_floor() {
        assert_eq!(PageRequest::clamped(0, 10).page, 1);
        assert_eq!(PageRequest::clamped(-5, 10).page, 1);
    }

    #[test]
    fn test_clamped_per_page_bounds() {
        assert_eq!(PageRequest::clamped(1, 0).per_page, 10);
        assert_eq!(PageRequest::clamped(1, 500).per_page, 100);
        assert_eq!(PageRequest::clamped(1, 25).per_page, 25);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Paginated<i64> = Paginated {
            items: Vec::new(),
            total_count: 15,
        };
        assert_eq!(page.total_pages(10), 2);
        assert_eq!(page.total_pages(5), 3);
        assert_eq!(page.total_pages(0), 0);
    }
}
