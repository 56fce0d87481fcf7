//! Page arithmetic for the gallery dialog.
//!
//! Pages are 1-indexed. The input list is assumed to already be in gallery
//! order; nothing here sorts.

use crate::constants::PAGE_SIZE;

/// Page math over a list of `total_items` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
}

impl Paginator {
    /// Create a paginator with the gallery page size.
    #[must_use]
    pub const fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, PAGE_SIZE)
    }

    /// Create a paginator with an explicit page size (at least 1).
    #[must_use]
    pub const fn with_page_size(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; zero when there are no items.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Clamp any requested page into `[1, total_pages]`, or 1 when empty.
    #[must_use]
    pub fn clamp_page(&self, requested: i64) -> usize {
        let total = i64::try_from(self.total_pages()).unwrap_or(i64::MAX);
        requested.min(total).max(1) as usize
    }

    /// Items visible on `page`. Out-of-range pages yield an empty slice.
    #[must_use]
    pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let Some(start) = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
        else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub const fn has_previous(&self, page: usize) -> bool {
        page > 1
    }

    #[must_use]
    pub const fn has_next(&self, page: usize) -> bool {
        page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Paginator::new(0).total_pages(), 0);
        assert_eq!(Paginator::new(1).total_pages(), 1);
        assert_eq!(Paginator::new(5).total_pages(), 1);
        assert_eq!(Paginator::new(6).total_pages(), 2);
        assert_eq!(Paginator::new(12).total_pages(), 3);
    }

    #[test]
    fn test_page_slice_twelve_items() {
        let items: Vec<u32> = (1..=12).collect();
        let paginator = Paginator::new(items.len());

        assert_eq!(paginator.page_slice(&items, 1), &[1, 2, 3, 4, 5]);
        assert_eq!(paginator.page_slice(&items, 2), &[6, 7, 8, 9, 10]);
        assert_eq!(paginator.page_slice(&items, 3), &[11, 12]);
        assert!(paginator.page_slice(&items, 4).is_empty());
        assert!(paginator.page_slice(&items, 0).is_empty());
        assert!(paginator.page_slice(&items, usize::MAX).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        let paginator = Paginator::new(12);
        assert_eq!(paginator.clamp_page(99), 3);
        assert_eq!(paginator.clamp_page(-5), 1);
        assert_eq!(paginator.clamp_page(0), 1);
        assert_eq!(paginator.clamp_page(2), 2);
        assert_eq!(paginator.clamp_page(i64::MAX), 3);
        assert_eq!(paginator.clamp_page(i64::MIN), 1);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        let paginator = Paginator::new(0);
        assert_eq!(paginator.clamp_page(7), 1);
        assert_eq!(paginator.clamp_page(-7), 1);
        assert!(paginator.page_slice(&items, 1).is_empty());
        assert!(!paginator.has_next(1));
        assert!(!paginator.has_previous(1));
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let paginator = Paginator::with_page_size(3, 0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.total_pages(), 3);
    }

    #[test]
    fn test_has_previous_and_next() {
        let paginator = Paginator::new(12);
        assert!(!paginator.has_previous(1));
        assert!(paginator.has_next(1));
        assert!(paginator.has_previous(3));
        assert!(!paginator.has_next(3));
    }
}
