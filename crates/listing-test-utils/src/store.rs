//! In-memory resource store
//!
//! Implements `ResourceStore` and `Duplicator` over plain vectors so
//! unit and integration tests can exercise the engine without a real
//! backend. Mutations are counted so tests can assert that rejected
//! actions touched nothing.

use listing_model::{
    Direction, Duplicator, Error, FieldValue, Operator, ResourceNode, ResourceQuery, ResourceStore,
    Result, Row,
};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    nodes: Vec<ResourceNode>,
    fields: HashMap<i64, HashMap<String, FieldValue>>,
    mutations: usize,
    duplicated: Vec<i64>,
}

/// An in-memory hierarchical resource store
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node with the same id
    pub fn insert(&self, node: ResourceNode) {
        let mut inner = self.inner.lock().unwrap();
        inner.nodes.retain(|n| n.id != node.id);
        inner.nodes.push(node);
    }

    /// Attach a dynamic field value to a node
    pub fn set_field(&self, id: i64, name: impl Into<String>, value: FieldValue) {
        let mut inner = self.inner.lock().unwrap();
        inner.fields.entry(id).or_default().insert(name.into(), value);
    }

    /// A node by id, if present
    pub fn node(&self, id: i64) -> Option<ResourceNode> {
        let inner = self.inner.lock().unwrap();
        inner.nodes.iter().find(|n| n.id == id).cloned()
    }

    /// Number of bulk mutations executed so far
    pub fn mutation_count(&self) -> usize {
        self.inner.lock().unwrap().mutations
    }

    /// Ids passed to the duplicator, in call order
    pub fn duplicated_ids(&self) -> Vec<i64> {
        self.inner.lock().unwrap().duplicated.clone()
    }

    fn field_of(inner: &Inner, node: &ResourceNode, name: &str) -> FieldValue {
        match name {
            "pagetitle" => FieldValue::Scalar(node.pagetitle.clone()),
            "isfolder" => FieldValue::Scalar(flag(node.isfolder)),
            "menuindex" => FieldValue::Scalar(node.menuindex.to_string()),
            "published" => FieldValue::Scalar(flag(node.published)),
            "deleted" => FieldValue::Scalar(flag(node.deleted)),
            _ => inner
                .fields
                .get(&node.id)
                .and_then(|fields| fields.get(name))
                .cloned()
                .unwrap_or(FieldValue::Missing),
        }
    }

    fn matching(inner: &Inner, query: &ResourceQuery) -> Vec<ResourceNode> {
        let mut nodes: Vec<ResourceNode> = inner
            .nodes
            .iter()
            .filter(|node| node.parent == query.parent)
            .filter(|node| {
                query.conditions.iter().all(|condition| {
                    match Self::field_of(inner, node, &condition.field) {
                        FieldValue::Scalar(value) => match condition.operator {
                            Operator::Equals => value == condition.value,
                            Operator::Contains => value.contains(&condition.value),
                        },
                        _ => false,
                    }
                })
            })
            .cloned()
            .collect();

        nodes.sort_by(|a, b| {
            for key in &query.order {
                let left = Self::field_of(inner, a, &key.field);
                let right = Self::field_of(inner, b, &key.field);
                let ordering = compare(&left, &right);
                let ordering = match key.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            a.id.cmp(&b.id)
        });
        nodes
    }
}

fn flag(value: bool) -> String {
    if value { "1".to_string() } else { "0".to_string() }
}

/// Compare two field values numerically when both sides parse as
/// integers, lexically otherwise
fn compare(left: &FieldValue, right: &FieldValue) -> Ordering {
    match (left.as_scalar(), right.as_scalar()) {
        (Some(l), Some(r)) => match (l.parse::<i64>(), r.parse::<i64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            _ => l.cmp(r),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl ResourceStore for MemoryStore {
    fn select(&self, query: &ResourceQuery) -> Result<Vec<Row>> {
        let inner = self.inner.lock().unwrap();
        let nodes = Self::matching(&inner, query);

        let rows = nodes
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|node| {
                let mut row = Row::new(node);
                for name in &query.fields {
                    match Self::field_of(&inner, &row.node, name) {
                        FieldValue::Missing => {}
                        value => row.set_value(name.clone(), value),
                    }
                }
                row
            })
            .collect();
        Ok(rows)
    }

    fn count(&self, query: &ResourceQuery) -> Result<usize> {
        let inner = self.inner.lock().unwrap();
        Ok(Self::matching(&inner, &query.unwindowed()).len())
    }

    fn fetch(&self, ids: &[i64]) -> Result<Vec<ResourceNode>> {
        let inner = self.inner.lock().unwrap();
        // Natural order is id ascending, deliberately NOT the
        // requested order; callers must reorder themselves.
        let mut nodes: Vec<ResourceNode> = inner
            .nodes
            .iter()
            .filter(|node| ids.contains(&node.id))
            .cloned()
            .collect();
        nodes.sort_by_key(|node| node.id);
        Ok(nodes)
    }

    fn ancestors(&self, id: i64) -> Result<Vec<i64>> {
        let inner = self.inner.lock().unwrap();
        let mut chain = Vec::new();
        let mut current = id;
        loop {
            let Some(node) = inner.nodes.iter().find(|n| n.id == current) else {
                break;
            };
            if node.parent == 0 {
                break;
            }
            if chain.contains(&node.parent) {
                return Err(Error::store(format!("Parent cycle at node {current}")));
            }
            chain.push(node.parent);
            current = node.parent;
        }
        Ok(chain)
    }

    fn set_published(&self, ids: &[i64], published: bool) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.mutations += 1;
        for node in inner.nodes.iter_mut() {
            if ids.contains(&node.id) {
                node.published = published;
            }
        }
        Ok(())
    }

    fn set_deleted(&self, ids: &[i64], deleted: bool) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.mutations += 1;
        for node in inner.nodes.iter_mut() {
            if ids.contains(&node.id) {
                node.deleted = deleted;
            }
        }
        Ok(())
    }
}

impl Duplicator for MemoryStore {
    fn duplicate(&self, id: i64) -> Result<i64> {
        let mut inner = self.inner.lock().unwrap();
        let Some(original) = inner.nodes.iter().find(|n| n.id == id).cloned() else {
            return Err(Error::duplicate(id, "no such resource"));
        };
        let new_id = inner.nodes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let mut copy = original;
        copy.id = new_id;
        inner.nodes.push(copy);
        inner.duplicated.push(id);
        inner.mutations += 1;
        Ok(new_id)
    }
}
