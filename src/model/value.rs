//! Universal value type for key-path traversal.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{PropertyMap, Record};

/// A node in a traversable value graph.
///
/// Covers every shape the key-path accessor distinguishes:
/// - Scalars: Null, Bool, Int, Float, String, Bytes, Date, DateTime
/// - Sequences: List (growable), Tuple (fixed length)
/// - Dictionaries: Map
/// - Opaque objects: Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),

    /// Growable sequence. Accepts appends and padding.
    List(Vec<Value>),
    /// Fixed-length sequence. Readable by index, never written through a path.
    Tuple(Vec<Value>),
    Map(PropertyMap),
    Record(Box<Record>),
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::String(_) => "STRING",
            Value::Bytes(_) => "BYTES",
            Value::Date(_) => "DATE",
            Value::DateTime(_) => "DATETIME",
            Value::List(_) => "LIST",
            Value::Tuple(_) => "TUPLE",
            Value::Map(_) => "MAP",
            Value::Record(_) => "RECORD",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }
    pub fn is_numeric(&self) -> bool { matches!(self, Value::Int(_) | Value::Float(_)) }
    pub fn is_string(&self) -> bool { matches!(self, Value::String(_)) }

    /// Attempt to extract as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Attempt to extract as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a List or Tuple.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// An empty `Value::Map`.
    pub fn map() -> Self {
        Value::Map(PropertyMap::new())
    }

    /// An empty `Value::List`.
    pub fn list() -> Self {
        Value::List(Vec::new())
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<NaiveDate> for Value { fn from(v: NaiveDate) -> Self { Value::Date(v) } }
impl From<DateTime<Utc>> for Value { fn from(v: DateTime<Utc>) -> Self { Value::DateTime(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Value::Date(d) => write!(f, "{d}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::List(l) => {
                write!(f, "[")?;
                write_items(f, l)?;
                write!(f, "]")
            }
            Value::Tuple(t) => {
                write!(f, "(")?;
                write_items(f, t)?;
                write!(f, ")")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                write_entries(f, m)?;
                write!(f, "}}")
            }
            Value::Record(r) => {
                write!(f, "{} {{", r.label)?;
                write_entries(f, &r.properties)?;
                write!(f, "}}")
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 { write!(f, ", ")?; }
        write!(f, "{v}")?;
    }
    Ok(())
}

/// Entries are sorted so output is stable across runs.
fn write_entries(f: &mut fmt::Formatter<'_>, map: &PropertyMap) -> fmt::Result {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (i, (k, v)) in entries.into_iter().enumerate() {
        if i > 0 { write!(f, ", ")?; }
        write!(f, "{k}: {v}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(3.5), Value::Float(3.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_list_from_vec() {
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn test_display_nested() {
        let v = Value::from(vec![("b", Value::from(vec![5])), ("a", Value::Null)]);
        assert_eq!(v.to_string(), "{a: null, b: [5]}");
        let t = Value::Tuple(vec![Value::Int(1), Value::from("x")]);
        assert_eq!(t.to_string(), "(1, \"x\")");
    }

    #[test]
    fn test_record_display() {
        let v = Value::from(Record::new("Point").with_property("x", 1));
        assert_eq!(v.to_string(), "Point {x: 1}");
        assert_eq!(v.type_name(), "RECORD");
    }

    #[test]
    fn test_serde_tagged() {
        let v = Value::from(vec![("n", 1)]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
