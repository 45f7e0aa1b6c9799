//! Pagination types

use crate::decode::PageMeta;

/// Result of advancing past a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Another page remains
    Continue {
        /// Index of the page to fetch next
        page: u32,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Current zero-based page index
    pub page: u32,
    /// Loop bound, provisional until pinned
    pub total_pages: u32,
    /// Has page 0's page count been applied?
    pub pinned: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 0,
            total_pages: 1,
            pinned: false,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state at page 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the current page is within the loop bound
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if the current page is the first one
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// Apply page metadata to the loop bound.
    ///
    /// Only takes effect on page 0 and only once; returns whether it did.
    pub fn pin(&mut self, meta: &PageMeta) -> bool {
        if self.pinned || !self.is_first_page() {
            return false;
        }
        self.total_pages = meta.total_pages.max(1);
        self.pinned = true;
        true
    }

    /// Move past the current page
    pub fn advance(&mut self) -> NextPage {
        self.page += 1;
        if self.has_more() {
            NextPage::Continue { page: self.page }
        } else {
            NextPage::Done
        }
    }
}
