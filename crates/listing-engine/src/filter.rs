//! Query filters
//!
//! Filters are an explicit, ordered list injected into the pipeline
//! at construction. Each filter sees the composed query, the full
//! configured column-name list, and the request parameters; a filter
//! with nothing to do for this request is a no-op.

use listing_model::{Operator, RequestParams, ResourceQuery};

/// A query-narrowing filter
pub trait Filter: Send + Sync {
    /// Narrow or reshape the query for this request
    ///
    /// Called once per request, for every filter, regardless of
    /// whether the request activates it.
    fn apply(&self, query: &mut ResourceQuery, columns: &[String], params: &RequestParams);
}

/// The stock per-column filter
///
/// For every configured column with a non-empty request value, adds a
/// condition on that column. Substring matching by default.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    operator: Operator,
}

impl FieldFilter {
    pub fn new() -> Self {
        Self {
            operator: Operator::Contains,
        }
    }

    /// Use a different comparison operator
    pub fn with_operator(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for FieldFilter {
    fn apply(&self, query: &mut ResourceQuery, columns: &[String], params: &RequestParams) {
        for column in columns {
            if let Some(value) = params.filter(column) {
                query.narrow(column.clone(), self.operator, value);
            }
        }
    }
}
