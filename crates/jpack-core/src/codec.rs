//! Codec entry points.

use crate::config::CodecConfig;
use crate::decoder;
use crate::encoder;
use crate::error::Result;
use crate::format::Encoded;
use crate::stats::{self, PackResult};
use serde_json::Value;

/// Encoder/decoder bound to a set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    pub config: CodecConfig,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Encode, keeping the plain/packed distinction.
    pub fn encode_records(&self, records: &Value) -> Encoded {
        encoder::encode_records(records, &self.config)
    }

    /// Encode into wire shape: either the input itself or `{schema, data}`.
    pub fn encode(&self, records: &Value) -> Value {
        self.encode_records(records).into_value()
    }

    pub fn decode(&self, value: &Value) -> Value {
        decoder::decode(value)
    }

    pub fn pack(&self, records: &Value) -> PackResult {
        let encoded = self.encode(records);
        let stats = stats::stats(records, &encoded);
        PackResult {
            encoded,
            stats,
            original: records.clone(),
        }
    }

    /// Parse JSON text and encode it.
    pub fn encode_str(&self, text: &str) -> Result<Value> {
        let records: Value = serde_json::from_str(text)?;
        Ok(self.encode(&records))
    }

    /// Parse JSON text and decode it.
    pub fn decode_str(&self, text: &str) -> Result<Value> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.decode(&value))
    }

    pub fn pack_str(&self, text: &str) -> Result<PackResult> {
        let records: Value = serde_json::from_str(text)?;
        Ok(self.pack(&records))
    }
}

pub fn encode(records: &Value) -> Value {
    Codec::default().encode(records)
}

pub fn decode(value: &Value) -> Value {
    decoder::decode(value)
}

pub fn pack_and_stats(records: &Value) -> PackResult {
    Codec::default().pack(records)
}

pub fn encode_str(text: &str) -> Result<Value> {
    Codec::default().encode_str(text)
}

pub fn decode_str(text: &str) -> Result<Value> {
    Codec::default().decode_str(text)
}

pub fn pack_str(text: &str) -> Result<PackResult> {
    Codec::default().pack_str(text)
}
