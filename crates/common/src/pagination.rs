//! Pagination utilities.
//!
//! Listings are served in fixed pages of [`QUESTIONS_PER_PAGE`] items. A page
//! number past the end of the collection is not an error here: it yields an
//! empty slice, and callers decide what an empty page means.

use serde::{Deserialize, Serialize};

/// Default page number (1-indexed)
const DEFAULT_PAGE: u32 = 1;

/// Items per listing page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters for listing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    QUESTIONS_PER_PAGE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

impl PaginationParams {
    /// Pagination for the given page at the standard page size.
    ///
    /// Page numbers below 1 are raised to 1.
    pub fn page(page: u32) -> Self {
        Self::new(page, QUESTIONS_PER_PAGE)
    }

    /// Create new pagination parameters.
    pub fn new(page: u32, per_page: u32) -> Self {
        let page = page.max(DEFAULT_PAGE);
        let per_page = if per_page == 0 {
            QUESTIONS_PER_PAGE
        } else {
            per_page
        };

        Self { page, per_page }
    }

    /// Offset of the first item on this page (0-indexed).
    ///
    /// Saturates instead of overflowing for absurd page numbers; such pages
    /// are simply empty.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
    }

    /// Get the limit for the page.
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    /// Slice `items[offset .. offset + limit]`, clamped to the collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

/// One page of an ordered collection, with the collection's total size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// The items for the current page
    pub items: Vec<T>,

    /// Current page number (1-indexed)
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Total number of items across all pages
    pub total: u64,
}

impl<T> PaginatedResult<T> {
    /// Create a new paginated result.
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            page,
            per_page,
            total,
        }
    }
}
