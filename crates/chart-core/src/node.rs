// File: crates/chart-core/src/node.rs
// Summary: Option-tree node with get-or-insert children, on-demand collection growth and safe-convert assignment.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{ChartError, Result};
use crate::path::MAX_INDEX;
use crate::schema::{Field, NodeKind, Shape};
use crate::value::{safe_convert, safe_convert_list, Value};

/// Content of one materialized field.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Value(Value),
    Child(Box<Node>),
    Items(Vec<Node>),
    Grid(Vec<Vec<Node>>),
}

/// One addressable entity of the option tree.
///
/// A node only stores fields that were touched; everything else is absent and
/// stays absent through `clone`. Ownership is strictly tree-shaped, so the
/// derived `Clone` is the deep copy the builder relies on.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    kind: NodeKind,
    slots: BTreeMap<&'static str, Slot>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, slots: BTreeMap::new() }
    }

    /// Node with the given fields set. Names the kind does not declare are skipped.
    pub fn from_fields<'a>(kind: NodeKind, fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        let mut node = Self::new(kind);
        for (name, value) in fields {
            if let Err(err) = node.set_field(name, value) {
                debug!(%err, "field skipped");
            }
        }
        node
    }

    pub fn kind(&self) -> NodeKind { self.kind }

    fn field_of(&self, name: &str) -> Result<&'static Field> {
        self.kind
            .field(name)
            .ok_or_else(|| ChartError::UnknownField { kind: self.kind, field: name.to_string() })
    }

    /// Named single child, inserted as a default node when absent.
    pub fn child_mut(&mut self, name: &str) -> Result<&mut Node> {
        self.descend(name, &[])
    }

    /// Element `index` of a collection, growing it with default nodes as needed.
    pub fn item_mut(&mut self, name: &str, index: usize) -> Result<&mut Node> {
        self.descend(name, &[index])
    }

    /// Cell `(outer, inner)` of a grid; both levels grow on demand.
    pub fn cell_mut(&mut self, name: &str, outer: usize, inner: usize) -> Result<&mut Node> {
        self.descend(name, &[outer, inner])
    }

    /// One resolution step: the number of indices must match the field's depth.
    pub fn descend(&mut self, name: &str, indices: &[usize]) -> Result<&mut Node> {
        let owner = self.kind;
        let field = self.field_of(name)?;
        let mismatch = || ChartError::NotANode { kind: owner, field: field.name.to_string() };
        if let Some(&index) = indices.iter().find(|&&i| i > MAX_INDEX) {
            return Err(ChartError::IndexOutOfRange { kind: owner, field: field.name.to_string(), index });
        }

        match (field.shape, indices) {
            (Shape::Child(kind), []) => {
                let slot = self
                    .slots
                    .entry(field.name)
                    .or_insert_with(|| Slot::Child(Box::new(Node::new(kind))));
                match slot {
                    Slot::Child(node) => Ok(node.as_mut()),
                    _ => Err(mismatch()),
                }
            }
            (Shape::Items(kind), &[index]) => {
                let slot = self.slots.entry(field.name).or_insert_with(|| Slot::Items(Vec::new()));
                match slot {
                    Slot::Items(items) => Ok(grow(items, index, || Node::new(kind))),
                    _ => Err(mismatch()),
                }
            }
            (Shape::Grid(kind), &[outer, inner]) => {
                let slot = self.slots.entry(field.name).or_insert_with(|| Slot::Grid(Vec::new()));
                match slot {
                    Slot::Grid(rows) => {
                        let row = grow(rows, outer, Vec::new);
                        Ok(grow(row, inner, || Node::new(kind)))
                    }
                    _ => Err(mismatch()),
                }
            }
            (Shape::Value(_) | Shape::List(_), _) => Err(mismatch()),
            (shape, _) => Err(ChartError::IndexArity {
                kind: owner,
                field: field.name.to_string(),
                expected: shape.depth(),
                got: indices.len(),
            }),
        }
    }

    /// Assign a value field, coercing to the declared type.
    ///
    /// List fields take a converted list. A collection (or grid) of inline cells
    /// takes a list (or list of lists) and materializes one cell per element.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let field = self.field_of(name)?;
        let value = value.into();
        let slot = match field.shape {
            Shape::Value(ty) => Slot::Value(safe_convert(ty, value)),
            Shape::List(ty) => Slot::Value(safe_convert_list(ty, value)),
            Shape::Items(kind) if is_inline(kind) => Slot::Items(cells(kind, value)),
            Shape::Grid(kind) if is_inline(kind) => Slot::Grid(match value {
                Value::List(rows) => rows.into_iter().map(|row| cells(kind, row)).collect(),
                _ => Vec::new(),
            }),
            _ => {
                return Err(ChartError::NotAValue { kind: self.kind, field: field.name.to_string() })
            }
        };
        self.slots.insert(field.name, slot);
        Ok(())
    }

    /// Replace a collection wholesale. Every node must be of the declared element kind.
    pub fn set_items(&mut self, name: &str, items: Vec<Node>) -> Result<()> {
        let field = self.field_of(name)?;
        let Shape::Items(expected) = field.shape else {
            return Err(ChartError::NotIndexed { kind: self.kind, field: field.name.to_string() });
        };
        if let Some(bad) = items.iter().find(|n| n.kind != expected) {
            return Err(ChartError::KindMismatch {
                kind: self.kind,
                field: field.name.to_string(),
                expected,
                got: bad.kind,
            });
        }
        self.slots.insert(field.name, Slot::Items(items));
        Ok(())
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> { self.slots.get(name) }

    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.slots.get(name) { Some(Slot::Value(v)) => Some(v), _ => None }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        match self.slots.get(name) { Some(Slot::Child(c)) => Some(c.as_ref()), _ => None }
    }

    pub fn items(&self, name: &str) -> &[Node] {
        match self.slots.get(name) { Some(Slot::Items(v)) => v.as_slice(), _ => &[] }
    }

    pub fn grid(&self, name: &str) -> &[Vec<Node>] {
        match self.slots.get(name) { Some(Slot::Grid(rows)) => rows.as_slice(), _ => &[] }
    }

    pub(crate) fn items_mut(&mut self, name: &str) -> Option<&mut Vec<Node>> {
        match self.slots.get_mut(name) { Some(Slot::Items(v)) => Some(v), _ => None }
    }

    /// Number of materialized fields (absent fields do not count).
    pub fn len(&self) -> usize { self.slots.len() }

    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// True when nothing below this node holds a value or a collection.
    /// A blank child is left out of the serialized output.
    pub fn is_blank(&self) -> bool {
        self.slots.values().all(|slot| matches!(slot, Slot::Child(c) if c.is_blank()))
    }
}

// Callers keep `index <= MAX_INDEX`, so `index + 1` cannot overflow.
fn grow<T>(items: &mut Vec<T>, index: usize, fill: impl FnMut() -> T) -> &mut T {
    if items.len() <= index {
        let len = index.saturating_add(1);
        trace!(from = items.len(), to = len, "growing collection");
        items.resize_with(len, fill);
    }
    &mut items[index]
}

fn is_inline(kind: NodeKind) -> bool {
    kind.schema().inline.is_some()
}

fn cells(kind: NodeKind, value: Value) -> Vec<Node> {
    match value {
        Value::List(values) => values.into_iter().map(|v| cell(kind, v)).collect(),
        _ => Vec::new(),
    }
}

fn cell(kind: NodeKind, value: Value) -> Node {
    let mut node = Node::new(kind);
    if let Some(field) = kind.schema().inline.and_then(|name| kind.field(name)) {
        if let Shape::Value(ty) = field.shape {
            node.slots.insert(field.name, Slot::Value(safe_convert(ty, value)));
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_is_inserted_once() {
        let mut root = Node::new(NodeKind::HcOptions);
        root.child_mut("title").unwrap().set_field("text", "a").unwrap();
        root.child_mut("title").unwrap();
        assert_eq!(root.child("title").unwrap().value("text"), Some(&Value::Text("a".into())));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn growth_preserves_existing_elements() {
        let mut root = Node::new(NodeKind::HcOptions);
        root.item_mut("series", 0).unwrap().set_field("name", "first").unwrap();
        root.item_mut("series", 3).unwrap();
        let series = root.items("series");
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].value("name"), Some(&Value::Text("first".into())));
        assert!(series[1].is_empty());
        root.item_mut("series", 1).unwrap();
        assert_eq!(root.items("series").len(), 4);
    }

    #[test]
    fn wrong_arity_is_reported() {
        let mut root = Node::new(NodeKind::HcOptions);
        assert!(matches!(root.child_mut("series"), Err(ChartError::IndexArity { expected: 1, got: 0, .. })));
        assert!(matches!(root.item_mut("title", 0), Err(ChartError::IndexArity { expected: 0, got: 1, .. })));
        assert!(matches!(root.child_mut("colors"), Err(ChartError::NotANode { .. })));
        assert!(matches!(root.child_mut("nope"), Err(ChartError::UnknownField { .. })));
        assert!(root.is_empty());
    }

    #[test]
    fn blank_children_do_not_count() {
        let mut root = Node::new(NodeKind::HcOptions);
        root.child_mut("legend").unwrap().child_mut("title").unwrap();
        assert!(root.is_blank());
        root.item_mut("xAxis", 0).unwrap();
        assert!(!root.is_blank());
    }

    #[test]
    fn matrix_from_nested_lists() {
        let mut series = Node::new(NodeKind::HcSeries);
        series
            .set_field("data_mat", vec![Value::from(vec![1.0, 2.0]), Value::from(vec![3])])
            .unwrap();
        let rows = series.grid("data_mat");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0].value("value"), Some(&Value::Float(3.0)));
    }
}
