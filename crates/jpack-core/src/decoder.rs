//! Reference resolution back to the original records.

use crate::format::{encoded_parts, SchemaView};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Rebuild the records of an encoded document.
///
/// Anything that is not encoded-shaped is returned unchanged. Integers with no
/// dictionary entry are kept as they are.
pub fn decode(value: &Value) -> Value {
    let Some((schema, data)) = encoded_parts(value) else {
        trace!("not an encoded document, passing through");
        return value.clone();
    };
    debug!(records = data.len(), refs = schema.len(), "decoding records");
    Value::Array(data.iter().map(|record| decode_record(record, schema)).collect())
}

pub fn decode_record(record: &Value, schema: SchemaView<'_>) -> Value {
    match record {
        Value::Object(map) => Value::Object(decode_object(map, schema)),
        other => resolve(other, schema),
    }
}

fn decode_object(map: &Map<String, Value>, schema: SchemaView<'_>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let decoded = match value {
                Value::Array(items) => {
                    Value::Array(items.iter().map(|item| resolve(item, schema)).collect())
                }
                Value::Object(inner) => Value::Object(decode_object(inner, schema)),
                scalar => resolve(scalar, schema),
            };
            (key.clone(), decoded)
        })
        .collect()
}

/// Substitute a non-negative integer found in the dictionary.
pub fn resolve(value: &Value, schema: SchemaView<'_>) -> Value {
    value
        .as_u64()
        .and_then(|id| schema.lookup(id))
        .unwrap_or(value)
        .clone()
}
