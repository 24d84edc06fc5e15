//! Query description handed to the resource store
//!
//! The pipeline composes a `ResourceQuery` (parent scope, requested
//! field names, filter conditions, ordering, window) and the store
//! executes it. Filters and hooks narrow the query by appending
//! conditions; they never run store I/O themselves.

use serde::{Deserialize, Serialize};

/// Comparison operator for a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Exact match on the stored value
    Equals,
    /// Substring match on the stored value
    Contains,
}

/// A single query-narrowing condition on a named field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

/// Sort direction for an ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

/// An ordering key applied by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

/// A composed query over the children of a parent node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceQuery {
    /// Parent node whose children are listed
    pub parent: i64,
    /// Field names the store must attach to each returned row
    pub fields: Vec<String>,
    /// Narrowing conditions, applied conjunctively
    pub conditions: Vec<Condition>,
    /// Ordering keys, first key wins ties broken by later keys
    pub order: Vec<OrderBy>,
    /// Window offset in rows
    pub offset: usize,
    /// Window size; `None` means unbounded
    pub limit: Option<usize>,
}

impl ResourceQuery {
    /// A query for the children of `parent` with no conditions or window
    pub fn children_of(parent: i64) -> Self {
        Self {
            parent,
            fields: Vec::new(),
            conditions: Vec::new(),
            order: Vec::new(),
            offset: 0,
            limit: None,
        }
    }

    /// Attach the field names to retrieve per row
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Append a narrowing condition
    pub fn narrow(&mut self, field: impl Into<String>, operator: Operator, value: impl Into<String>) {
        self.conditions.push(Condition {
            field: field.into(),
            operator,
            value: value.into(),
        });
    }

    /// Replace the ordering keys
    pub fn order_by(&mut self, order: Vec<OrderBy>) {
        self.order = order;
    }

    /// Set the pagination window
    pub fn window(&mut self, offset: usize, limit: usize) {
        self.offset = offset;
        self.limit = Some(limit);
    }

    /// The same query without its window, for counting total matches
    pub fn unwindowed(&self) -> Self {
        let mut query = self.clone();
        query.offset = 0;
        query.limit = None;
        query
    }
}
