//! Request parameters consumed by the listing pipeline
//!
//! The HTTP layer is out of scope; callers hand the engine the decoded
//! query-string pairs and this type extracts the parts the pipeline
//! understands (page number, page-size selection, per-column filter
//! values) while keeping the raw pairs for pagination links.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Query-string parameter name for the page number
pub const PAGE_PARAM: &str = "page";

/// Query-string parameter name for the page-size selection
pub const LIMIT_PARAM: &str = "limit";

/// Decoded request parameters for one listing request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestParams {
    /// 1-based page number; defaults to 1
    pub page: usize,
    /// Requested page size; honored only when the config lists it
    pub limit: Option<usize>,
    /// Filter values keyed by column name
    pub filters: HashMap<String, String>,
    /// The raw query pairs, preserved for pagination links
    pub raw: Vec<(String, String)>,
}

impl Default for RequestParams {
    /// An empty request: first page, no limit selection, no filters
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
            filters: HashMap::new(),
            raw: Vec::new(),
        }
    }
}

impl RequestParams {
    /// Build parameters from decoded query-string pairs
    ///
    /// `page` and `limit` are parsed out of the reserved parameter
    /// names; every other pair is kept as a potential filter value.
    /// Unparseable or zero page numbers fall back to page 1.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = Self {
            page: 1,
            limit: None,
            filters: HashMap::new(),
            raw: pairs.to_vec(),
        };

        for (name, value) in pairs {
            match name.as_str() {
                PAGE_PARAM => {
                    if let Ok(page) = value.parse::<usize>()
                        && page > 0
                    {
                        params.page = page;
                    }
                }
                LIMIT_PARAM => {
                    params.limit = value.parse().ok();
                }
                _ => {
                    params.filters.insert(name.clone(), value.clone());
                }
            }
        }

        params
    }

    /// The filter value for a column, if one was supplied and non-empty
    pub fn filter(&self, column: &str) -> Option<&str> {
        self.filters
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
