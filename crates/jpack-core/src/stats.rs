//! Size statistics for an original/encoded pair.

use crate::codec::Codec;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SIZE_UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Compression statistics. Positive `reduction` means the encoded form is smaller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionStats {
    pub original_size: usize,
    pub compressed_size: usize,
    pub reduction: i64,
    /// Percentage reduction, one decimal place.
    pub compression_ratio: f64,
    pub compression_percentage: String,
}

impl CompressionStats {
    pub fn from_sizes(original_size: usize, compressed_size: usize) -> Self {
        let reduction = original_size as i64 - compressed_size as i64;
        let ratio = if original_size == 0 {
            0.0
        } else {
            reduction as f64 / original_size as f64 * 100.0
        };
        let fixed = format!("{ratio:.1}");
        Self {
            original_size,
            compressed_size,
            reduction,
            compression_ratio: fixed.parse().unwrap_or(0.0),
            compression_percentage: format!("{fixed}%"),
        }
    }
}

/// Byte length of the compact JSON serialization.
pub fn serialized_len(value: &Value) -> usize {
    serde_json::to_vec(value).map_or(0, |bytes| bytes.len())
}

pub fn stats(original: &Value, encoded: &Value) -> CompressionStats {
    CompressionStats::from_sizes(serialized_len(original), serialized_len(encoded))
}

/// Encoded form together with its statistics and the input it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackResult {
    pub encoded: Value,
    pub stats: CompressionStats,
    pub original: Value,
}

/// Human readable size, base 1024: `0 B`, `512 B`, `1.5 KB`, `2 MB`.
pub fn format_bytes(bytes: usize) -> String {
    if bytes == 0 {
        return "0 B".into();
    }
    let mut exp = 0;
    let mut unit = 1usize;
    while exp + 1 < SIZE_UNITS.len() && bytes / unit >= 1024 {
        unit *= 1024;
        exp += 1;
    }
    let fixed = format!("{:.1}", bytes as f64 / unit as f64);
    let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
    format!("{trimmed} {}", SIZE_UNITS[exp])
}

/// Analytics for one round over raw JSON text.
///
/// Sizes compare the raw input text with the compact encoded form; line counts
/// compare the input with the pretty-printed output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReport {
    #[serde(flatten)]
    pub stats: CompressionStats,
    pub original_lines: usize,
    pub formatted_lines: usize,
    pub encoded: bool,
}

impl TextReport {
    pub fn from_input(text: &str, codec: &Codec) -> Result<Self> {
        let parsed: Value = serde_json::from_str(text)?;
        let encoded = codec.encode_records(&parsed);
        let is_packed = encoded.is_packed();
        let output = encoded.into_value();
        let pretty = serde_json::to_string_pretty(&output)?;
        Ok(Self {
            stats: CompressionStats::from_sizes(text.len(), serialized_len(&output)),
            original_lines: text.split('\n').count(),
            formatted_lines: pretty.split('\n').count(),
            encoded: is_packed,
        })
    }
}
