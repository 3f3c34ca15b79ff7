//! Encoded document shape and its validity check.

use crate::dictionary::Dictionary;
use serde::Serialize;
use serde_json::{Map, Value};

pub const SCHEMA_FIELD: &str = "schema";
pub const DATA_FIELD: &str = "data";

/// The `{schema, data}` pair produced when encoding actually happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedRecords {
    pub schema: Dictionary,
    pub data: Vec<Value>,
}

impl EncodedRecords {
    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity(2);
        map.insert(SCHEMA_FIELD.into(), Value::Object(self.schema.into_schema()));
        map.insert(DATA_FIELD.into(), Value::Array(self.data));
        Value::Object(map)
    }
}

/// Result of an encode call. Callers must tell the two shapes apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoded {
    /// Input returned unchanged.
    Plain(Value),
    Packed(EncodedRecords),
}

impl Encoded {
    pub fn is_packed(&self) -> bool {
        matches!(self, Self::Packed(_))
    }

    pub fn as_packed(&self) -> Option<&EncodedRecords> {
        match self {
            Self::Packed(records) => Some(records),
            Self::Plain(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Plain(value) => value,
            Self::Packed(records) => records.into_value(),
        }
    }
}

/// Read-only view over a wire `schema` member.
///
/// An object is looked up by decimal id string; an array by position.
#[derive(Debug, Clone, Copy)]
pub enum SchemaView<'a> {
    Map(&'a Map<String, Value>),
    List(&'a [Value]),
}

impl<'a> SchemaView<'a> {
    pub fn lookup(&self, id: u64) -> Option<&'a Value> {
        match *self {
            Self::Map(map) => map.get(&id.to_string()),
            Self::List(items) => usize::try_from(id).ok().and_then(|idx| items.get(idx)),
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Self::Map(map) => map.len(),
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split an encoded document into its schema view and record array.
pub fn encoded_parts(value: &Value) -> Option<(SchemaView<'_>, &[Value])> {
    let Value::Object(map) = value else {
        return None;
    };
    let schema = match map.get(SCHEMA_FIELD)? {
        Value::Object(entries) => SchemaView::Map(entries),
        Value::Array(entries) => SchemaView::List(entries.as_slice()),
        _ => return None,
    };
    match map.get(DATA_FIELD)? {
        Value::Array(data) => Some((schema, data.as_slice())),
        _ => None,
    }
}

/// True iff the value has a dictionary-like `schema` and an array `data`.
pub fn is_encoded(value: &Value) -> bool {
    encoded_parts(value).is_some()
}
