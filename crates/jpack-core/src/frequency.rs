//! Pass 1: scalar frequency analysis.

use crate::canonical::{canonical_key, CanonicalKey};
use serde_json::Value;
use std::collections::HashMap;

pub type FrequencyTable = HashMap<CanonicalKey, usize>;

/// Count every scalar leaf reachable from the records, keyed by canonical form.
///
/// Arrays and objects are never counted as units, only their leaves.
pub fn count_values(records: &[Value]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for record in records {
        count_into(record, &mut table);
    }
    table
}

fn count_into(value: &Value, table: &mut FrequencyTable) {
    match value {
        Value::Object(map) => {
            for v in map.values() {
                count_into(v, table);
            }
        }
        Value::Array(items) => {
            for item in items {
                count_into(item, table);
            }
        }
        scalar => {
            if let Some(key) = canonical_key(scalar) {
                *table.entry(key).or_insert(0) += 1;
            }
        }
    }
}

/// Occurrences of a single value; 0 for composites and unseen scalars.
pub fn occurrences(table: &FrequencyTable, value: &Value) -> usize {
    canonical_key(value)
        .and_then(|key| table.get(&key).copied())
        .unwrap_or(0)
}
