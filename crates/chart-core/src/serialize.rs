// File: crates/chart-core/src/serialize.rs
// Summary: Node -> JSON in schema order, skipping absent fields, then the textual key substitutions.

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

use crate::node::{Node, Slot};
use crate::value::Value;

/// One textual rewrite over serialized JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Substitution {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self { pattern, replacement }
    }
}

/// Apply `table` in order. A pattern must not contain any earlier pattern,
/// or the earlier rewrite would break the later match.
pub fn apply_substitutions(json: &str, table: &[Substitution]) -> String {
    table.iter().fold(json.to_string(), |acc, s| acc.replace(s.pattern, s.replacement))
}

impl Node {
    /// JSON object in schema field order. Absent fields and blank children are
    /// left out; collections are always written, element by element.
    pub fn to_json(&self) -> Json {
        let schema = self.kind().schema();
        if let Some(inline) = schema.inline {
            return self.value(inline).and_then(value_json).unwrap_or(Json::Null);
        }

        let mut map = Map::new();
        for field in schema.fields {
            let json = match self.slot(field.name) {
                None => continue,
                Some(Slot::Value(v)) => match value_json(v) {
                    Some(json) => json,
                    None => continue,
                },
                Some(Slot::Child(child)) if child.is_blank() => continue,
                Some(Slot::Child(child)) => child.to_json(),
                Some(Slot::Items(items)) => Json::Array(items.iter().map(Node::to_json).collect()),
                Some(Slot::Grid(rows)) => Json::Array(
                    rows.iter()
                        .map(|row| Json::Array(row.iter().map(Node::to_json).collect()))
                        .collect(),
                ),
            };
            map.insert(field.name.to_string(), json);
        }
        Json::Object(map)
    }

    /// Compact JSON text with `table` applied.
    pub fn to_json_string(&self, table: &[Substitution]) -> String {
        apply_substitutions(&self.to_json().to_string(), table)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

// Non-finite floats have no JSON form: skipped as a field, null inside a list.
fn value_json(value: &Value) -> Option<Json> {
    match value {
        Value::Bool(b) => Some(Json::Bool(*b)),
        Value::Int(i) => Some(Json::Number((*i).into())),
        Value::Float(f) => Number::from_f64(*f).map(Json::Number),
        Value::Text(s) => Some(Json::String(s.clone())),
        Value::List(items) => {
            Some(Json::Array(items.iter().map(|v| value_json(v).unwrap_or(Json::Null)).collect()))
        }
    }
}
