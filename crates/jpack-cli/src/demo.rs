//! Built-in sample run: a small user list plus a generated dataset.

use crate::commands::verify_records;
use anyhow::Result;
use jpack_core::{format_bytes, is_encoded, Codec};
use serde_json::{json, Value};
use std::time::Instant;

pub fn sample_users() -> Value {
    json!([
        {"name": "John", "role": "admin", "active": true},
        {"name": "Jane", "role": "admin", "active": true},
        {"name": "Bob", "role": "user", "active": false}
    ])
}

/// Records with repeated names, roles and departments.
///
/// Ids start at 10000 so they stay clear of the reference id range.
pub fn generated_records(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                let role = if i % 3 == 0 { "admin" } else { "user" };
                json!({
                    "id": 10_000 + i,
                    "name": format!("User {}", i % 10),
                    "role": role,
                    "active": i % 2 == 0,
                    "department": format!("Dept {}", i % 5),
                })
            })
            .collect(),
    )
}

pub fn run(codec: &Codec, records: usize) -> Result<i32> {
    println!("jpack {}", jpack_core::VERSION);

    let users = sample_users();
    let packed = codec.pack(&users);
    println!("\nSample users");
    println!("  encoded:   {}", is_encoded(&packed.encoded));
    println!("  original:  {}", format_bytes(packed.stats.original_size));
    println!("  encoded:   {}", format_bytes(packed.stats.compressed_size));
    println!("  reduction: {}", packed.stats.compression_percentage);
    verify_records(codec, &users)?;
    println!("  integrity: preserved");

    let data = generated_records(records);
    let started = Instant::now();
    let encoded = codec.encode(&data);
    let encode_time = started.elapsed();
    let started = Instant::now();
    let decoded = codec.decode(&encoded);
    let decode_time = started.elapsed();
    let stats = jpack_core::stats(&data, &encoded);

    println!("\nGenerated dataset ({records} records)");
    println!("  encode:    {encode_time:?}");
    println!("  decode:    {decode_time:?}");
    println!("  original:  {}", format_bytes(stats.original_size));
    println!("  encoded:   {}", format_bytes(stats.compressed_size));
    println!("  reduction: {}", stats.compression_percentage);
    println!("  integrity: {}", if decoded == data { "preserved" } else { "lost" });
    Ok(0)
}
