//! JPack — reversible value deduplication for JSON record sequences.
//!
//! Encoding runs two passes over the records:
//! 1. Frequency analysis — count every scalar leaf by canonical form
//! 2. Reference assignment — repeated scalars move into a dictionary and are
//!    replaced by dense integer ids in first-encounter order
//!
//! The wire form is `{"schema": {"0": ..}, "data": [..]}`. Inputs too small to
//! benefit, or with nothing worth a reference, are returned unchanged.

pub mod canonical;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod format;
pub mod frequency;
pub mod stats;

pub use codec::{decode, decode_str, encode, encode_str, pack_and_stats, pack_str, Codec};
pub use config::CodecConfig;
pub use dictionary::Dictionary;
pub use error::{JPackError, Result};
pub use format::{is_encoded, Encoded, EncodedRecords};
pub use stats::{format_bytes, stats, CompressionStats, PackResult, TextReport};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
