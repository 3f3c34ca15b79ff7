//! Codec thresholds.

use crate::error::{JPackError, Result};
use serde::{Deserialize, Serialize};

/// Thresholds deciding when encoding is attempted and which scalars get a reference id.
///
/// The defaults are the fixed values every wire-compatible producer uses:
/// at least 3 records, a scalar seen more than once, and a canonical form
/// longer than 3 UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Inputs with fewer records pass through untouched.
    pub min_records: usize,
    /// A scalar must occur at least this many times.
    pub min_occurrences: usize,
    /// A scalar's canonical form must be at least this many UTF-16 code units long.
    pub min_key_len: usize,
}

impl CodecConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_occurrences == 0 {
            return Err(JPackError::InvalidConfig(
                "min_occurrences must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_records: 3,
            min_occurrences: 2,
            min_key_len: 4,
        }
    }
}
