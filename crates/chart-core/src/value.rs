// File: crates/chart-core/src/value.rs
// Summary: Field values and the safe-convert coercion applied when a field is set.

use serde::Serialize;
use std::fmt;

/// Declared primitive type of a value field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Int,
    Float,
    Text,
}

impl ScalarType {
    /// Value a field takes when an incoming value has no conversion rule.
    pub fn default_value(self) -> Value {
        match self {
            ScalarType::Bool => Value::Bool(false),
            ScalarType::Int => Value::Int(0),
            ScalarType::Float => Value::Float(0.0),
            ScalarType::Text => Value::Text(String::new()),
        }
    }
}

/// A value carried by a field: a primitive or a list of values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self { Value::Bool(b) => Some(*b), _ => None }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self { Value::Int(i) => Some(*i), _ => None }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self { Value::Float(f) => Some(*f), Value::Int(i) => Some(*i as f64), _ => None }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self { Value::Text(s) => Some(s), _ => None }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self { Value::List(items) => Some(items), _ => None }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { f.write_str(",")?; }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Coerce `value` into `target`.
///
/// Rules: bool from number is `value > 0`, bool from text is a case-insensitive
/// `"true"`; number from bool is 1/0; number from text parses (invariant format)
/// with 0 on failure; int from float truncates; text from anything is its display
/// form. A list has no rule into a non-text scalar and yields the default.
pub fn safe_convert(target: ScalarType, value: Value) -> Value {
    match (target, value) {
        (ScalarType::Bool, Value::Bool(b)) => Value::Bool(b),
        (ScalarType::Bool, Value::Int(i)) => Value::Bool(i > 0),
        (ScalarType::Bool, Value::Float(f)) => Value::Bool(f > 0.0),
        (ScalarType::Bool, Value::Text(s)) => Value::Bool(s.trim().eq_ignore_ascii_case("true")),

        (ScalarType::Int, Value::Bool(b)) => Value::Int(i64::from(b)),
        (ScalarType::Int, Value::Int(i)) => Value::Int(i),
        (ScalarType::Int, Value::Float(f)) => Value::Int(f as i64),
        (ScalarType::Int, Value::Text(s)) => Value::Int(s.trim().parse().unwrap_or(0)),

        (ScalarType::Float, Value::Bool(b)) => Value::Float(if b { 1.0 } else { 0.0 }),
        (ScalarType::Float, Value::Int(i)) => Value::Float(i as f64),
        (ScalarType::Float, Value::Float(f)) => Value::Float(f),
        (ScalarType::Float, Value::Text(s)) => Value::Float(s.trim().parse().unwrap_or(0.0)),

        (ScalarType::Text, v) => Value::Text(v.to_string()),

        (target, Value::List(_)) => target.default_value(),
    }
}

/// Coerce `value` into a list of `element`. A scalar has no rule into a list
/// and yields the empty list.
pub fn safe_convert_list(element: ScalarType, value: Value) -> Value {
    match value {
        Value::List(items) => Value::List(items.into_iter().map(|v| safe_convert(element, v)).collect()),
        _ => Value::List(Vec::new()),
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self { Value::Bool(v) }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self { Value::Int(v.into()) }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::Int(v) }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self { Value::Int(v.into()) }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self { Value::Int(i64::try_from(v).unwrap_or(i64::MAX)) }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self { Value::Float(v.into()) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Float(v) }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Text(v.to_string()) }
}

impl From<String> for Value {
    fn from(v: String) -> Self { Value::Text(v) }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self { Value::Text(v.clone()) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self { Value::List(v.iter().cloned().map(Into::into).collect()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_from_number_is_positive_check() {
        assert_eq!(safe_convert(ScalarType::Bool, Value::Int(5)), Value::Bool(true));
        assert_eq!(safe_convert(ScalarType::Bool, Value::Int(0)), Value::Bool(false));
        assert_eq!(safe_convert(ScalarType::Bool, Value::Float(-0.5)), Value::Bool(false));
        assert_eq!(safe_convert(ScalarType::Bool, Value::Text("TRUE".into())), Value::Bool(true));
        assert_eq!(safe_convert(ScalarType::Bool, Value::Text("yes".into())), Value::Bool(false));
    }

    #[test]
    fn numbers_from_bool_and_text() {
        assert_eq!(safe_convert(ScalarType::Int, Value::Bool(true)), Value::Int(1));
        assert_eq!(safe_convert(ScalarType::Float, Value::Bool(false)), Value::Float(0.0));
        assert_eq!(safe_convert(ScalarType::Float, Value::Text("2.5".into())), Value::Float(2.5));
        assert_eq!(safe_convert(ScalarType::Float, Value::Text("2,5".into())), Value::Float(0.0));
        assert_eq!(safe_convert(ScalarType::Int, Value::Text("12".into())), Value::Int(12));
        assert_eq!(safe_convert(ScalarType::Int, Value::Text("1.5".into())), Value::Int(0));
        assert_eq!(safe_convert(ScalarType::Int, Value::Float(3.9)), Value::Int(3));
    }

    #[test]
    fn text_from_anything() {
        assert_eq!(safe_convert(ScalarType::Text, Value::Float(1.5)), Value::Text("1.5".into()));
        assert_eq!(safe_convert(ScalarType::Text, Value::Bool(true)), Value::Text("true".into()));
        assert_eq!(
            safe_convert(ScalarType::Text, Value::from(vec![1, 2])),
            Value::Text("1,2".into())
        );
    }

    #[test]
    fn list_into_scalar_is_a_miss() {
        assert_eq!(safe_convert(ScalarType::Float, Value::from(vec![1.0])), Value::Float(0.0));
        assert_eq!(safe_convert_list(ScalarType::Float, Value::Int(3)), Value::List(Vec::new()));
        assert_eq!(
            safe_convert_list(ScalarType::Float, Value::from(vec![1, 2])),
            Value::List(vec![Value::Float(1.0), Value::Float(2.0)])
        );
    }

    #[test]
    fn serializes_untagged() {
        let v = Value::from(vec![Value::Bool(true), Value::Int(2), Value::Float(0.5), Value::from("a")]);
        assert_eq!(serde_json::to_string(&v).expect("serialize"), r#"[true,2,0.5,"a"]"#);
    }
}
