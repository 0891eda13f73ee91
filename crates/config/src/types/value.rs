//! Resolved configuration values and trees.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as JsonValue;

/// An insertion-ordered mapping from key to value.
///
/// A configuration tree is a `Table` keyed by application name.
pub type Table = IndexMap<String, Value>;

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Table(Table),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Elements of a tuple or list.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) | Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Look up a nested value by key path.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self.as_table()?.get(*head)?.get_path(rest),
        }
    }

    /// Convert a JSON document into a value. `null` has no counterpart and
    /// yields `None`; nulls inside objects and arrays are dropped.
    ///
    /// Arrays become lists. Integral numbers that fit in `i64` become
    /// integers, every other number becomes a float.
    pub fn from_json(json: JsonValue) -> Option<Value> {
        match json {
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(Value::Boolean(b)),
            JsonValue::Number(n) => Some(match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            JsonValue::String(s) => Some(Value::String(s)),
            JsonValue::Array(items) => Some(Value::List(
                items.into_iter().filter_map(Value::from_json).collect(),
            )),
            JsonValue::Object(map) => Some(Value::Table(table_from_json_map(map))),
        }
    }
}

/// Convert a JSON object into a table, dropping `null` entries.
pub fn table_from_json_map(map: serde_json::Map<String, JsonValue>) -> Table {
    map.into_iter()
        .filter_map(|(key, value)| Value::from_json(value).map(|value| (key, value)))
        .collect()
}

/// Look up a nested value in a tree by key path.
pub fn get_path<'a>(table: &'a Table, path: &[&str]) -> Option<&'a Value> {
    let (head, rest) = path.split_first()?;
    table.get(*head)?.get_path(rest)
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Value::Table(table)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Tuple(items) | Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Table(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (key, value) in table {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Renders values the way an operator would write them in a variable:
/// collections are comma-joined, tables fall back to JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Tuple(items) | Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Table(table) => {
                let json = serde_json::to_string(table).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
