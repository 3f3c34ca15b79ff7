//! Pass 2: reference assignment and record rewriting.

use crate::canonical::{canonical_key, CanonicalKey};
use crate::config::CodecConfig;
use crate::dictionary::Dictionary;
use crate::format::{Encoded, EncodedRecords};
use crate::frequency::{count_values, FrequencyTable};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Accumulator threaded through the encode walk.
///
/// Holds the canonical key → id map and the dictionary being built. Ids are
/// handed out in the order eligible scalars are first visited.
pub struct RefAssigner<'a> {
    frequencies: &'a FrequencyTable,
    config: &'a CodecConfig,
    ids: HashMap<CanonicalKey, u64>,
    dictionary: Dictionary,
}

impl<'a> RefAssigner<'a> {
    pub fn new(frequencies: &'a FrequencyTable, config: &'a CodecConfig) -> Self {
        Self {
            frequencies,
            config,
            ids: HashMap::new(),
            dictionary: Dictionary::new(),
        }
    }

    pub fn is_eligible(&self, key: &CanonicalKey) -> bool {
        let count = self.frequencies.get(key).copied().unwrap_or(0);
        count >= self.config.min_occurrences && key.len() >= self.config.min_key_len
    }

    /// Replace an eligible scalar by its reference id; anything else is returned as is.
    pub fn process_value(&mut self, value: &Value) -> Value {
        let Some(key) = canonical_key(value) else {
            return value.clone();
        };
        if !self.is_eligible(&key) {
            return value.clone();
        }
        let id = match self.ids.get(&key) {
            Some(&id) => id,
            None => {
                let id = self.dictionary.insert(value.clone());
                self.ids.insert(key, id);
                id
            }
        };
        Value::from(id)
    }

    /// Rewrite one top-level record.
    pub fn encode_record(&mut self, record: &Value) -> Value {
        match record {
            Value::Object(map) => Value::Object(self.encode_object(map)),
            other => self.process_value(other),
        }
    }

    // Nested objects recurse; array fields are checked element by element
    // and composite elements inside them are left alone.
    fn encode_object(&mut self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::with_capacity(map.len());
        for (key, value) in map {
            let encoded = match value {
                Value::Array(items) => {
                    let mut elements = Vec::with_capacity(items.len());
                    for item in items {
                        elements.push(self.process_value(item));
                    }
                    Value::Array(elements)
                }
                Value::Object(inner) => Value::Object(self.encode_object(inner)),
                scalar => self.process_value(scalar),
            };
            out.insert(key.clone(), encoded);
        }
        out
    }

    pub fn finish(self) -> Dictionary {
        self.dictionary
    }
}

/// Encode a record sequence, or hand it back untouched when encoding does not apply.
pub fn encode_records(records: &Value, config: &CodecConfig) -> Encoded {
    let items = match records {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            debug!("input is not a non-empty array, passing through");
            return Encoded::Plain(records.clone());
        }
    };
    if items.len() < config.min_records {
        debug!(records = items.len(), min = config.min_records, "too few records, passing through");
        return Encoded::Plain(records.clone());
    }

    let frequencies = count_values(items);
    let mut assigner = RefAssigner::new(&frequencies, config);
    let data: Vec<Value> = items.iter().map(|record| assigner.encode_record(record)).collect();
    let schema = assigner.finish();

    if schema.is_empty() {
        debug!(records = items.len(), "no repeated values worth a reference, passing through");
        return Encoded::Plain(records.clone());
    }

    debug!(
        records = items.len(),
        distinct = frequencies.len(),
        refs = schema.len(),
        "encoded records"
    );
    Encoded::Packed(EncodedRecords { schema, data })
}
