//! Reference dictionary: dense ids in first-encounter order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Id → scalar store. Ids are dense and start at 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<Value>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under the next unused id and return that id.
    pub fn insert(&mut self, value: Value) -> u64 {
        let id = self.entries.len() as u64;
        self.entries.push(value);
        id
    }

    pub fn get(&self, id: u64) -> Option<&Value> {
        usize::try_from(id).ok().and_then(|idx| self.entries.get(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Value)> {
        self.entries.iter().enumerate().map(|(id, v)| (id as u64, v))
    }

    /// Wire form: a JSON object keyed by decimal id strings.
    pub fn into_schema(self) -> Map<String, Value> {
        self.entries
            .into_iter()
            .enumerate()
            .map(|(id, v)| (id.to_string(), v))
            .collect()
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in self.iter() {
            map.serialize_entry(&id.to_string(), value)?;
        }
        map.end()
    }
}
