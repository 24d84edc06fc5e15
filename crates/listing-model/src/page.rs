//! Pagination window over a listing result

use crate::params::{PAGE_PARAM, RequestParams};
use serde::{Deserialize, Serialize};

/// One page of a listing result
///
/// Carries the request's raw query pairs so pagination links can
/// re-append every non-page parameter (active filters, limit
/// selection) with only the page number swapped out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The rows on this page, in display order
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    /// Page size used for the window
    pub per_page: usize,
    /// Total matching rows across all pages
    pub total: usize,
    /// Raw query pairs from the originating request
    query: Vec<(String, String)>,
}

impl<T> Page<T> {
    /// Assemble a page from a materialized window
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        Self {
            items,
            page,
            per_page,
            total,
            query: Vec::new(),
        }
    }

    /// Attach the request parameters whose query pairs pagination
    /// links should preserve
    pub fn appends(mut self, params: &RequestParams) -> Self {
        self.query = params.raw.clone();
        self
    }

    /// Number of pages needed for `total` rows; at least 1
    pub fn last_page(&self) -> usize {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Whether a page follows this one
    pub fn has_more(&self) -> bool {
        self.page < self.last_page()
    }

    /// Query pairs for a link to `page`, preserving all other
    /// request parameters
    pub fn query_for_page(&self, page: usize) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .query
            .iter()
            .filter(|(name, _)| name != PAGE_PARAM)
            .cloned()
            .collect();
        pairs.push((PAGE_PARAM.to_string(), page.to_string()));
        pairs
    }
}
