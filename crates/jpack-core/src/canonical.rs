//! Canonical scalar keys shared by frequency counting and reference lookup.

use serde_json::Value;
use std::fmt;

/// Compact JSON form of a scalar. Equal keys mean same type and same source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in UTF-16 code units, quotes included for strings.
    pub fn len(&self) -> usize {
        self.0.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Canonical key of a scalar, `None` for arrays and objects.
///
/// Numbers keep their textual form, so `1` and `1.0` stay distinct.
pub fn canonical_key(value: &Value) -> Option<CanonicalKey> {
    match value {
        Value::Null => Some(CanonicalKey("null".into())),
        Value::Bool(b) => Some(CanonicalKey(b.to_string())),
        Value::Number(n) => Some(CanonicalKey(n.to_string())),
        Value::String(_) => serde_json::to_string(value).ok().map(CanonicalKey),
        Value::Array(_) | Value::Object(_) => None,
    }
}
