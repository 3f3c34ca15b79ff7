//! Public API properties: round-trip, pass-through, minimality, determinism.

use jpack_core::{
    decode, encode, is_encoded, pack_and_stats, stats, Codec, CodecConfig, Encoded,
};
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn employees(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                let role = if i % 3 == 0 { "admin" } else { "user" };
                let city = if i % 2 == 0 { "New York" } else { "Berlin" };
                json!({
                    "id": i,
                    "name": format!("User {}", i % 10),
                    "role": role,
                    "active": i % 2 == 0,
                    "department": format!("Dept {}", i % 5),
                    "tags": ["staff", format!("team-{}", i % 4)],
                    "address": {"city": city, "zip": null}
                })
            })
            .collect(),
    )
}

fn collect_ints(value: &Value, out: &mut BTreeSet<u64>) {
    match value {
        Value::Object(map) => map.values().for_each(|v| collect_ints(v, out)),
        Value::Array(items) => items.iter().for_each(|v| collect_ints(v, out)),
        other => {
            if let Some(n) = other.as_u64() {
                out.insert(n);
            }
        }
    }
}

// ============================================================
// Round-trip
// ============================================================

#[test]
fn test_roundtrip_generated() {
    // ids 0..n collide with schema ids, so keep numeric payloads out of that range
    let mut records = employees(200);
    for (i, r) in records.as_array_mut().unwrap().iter_mut().enumerate() {
        r["id"] = json!(10_000 + i);
    }
    let encoded = encode(&records);
    assert!(is_encoded(&encoded));
    assert_eq!(decode(&encoded), records);
}

#[test]
fn test_roundtrip_heterogeneous_records() {
    let records = json!([
        {"kind": "event", "payload": {"level": "warning", "codes": ["E100", "E200"]}},
        "standalone text",
        {"kind": "event", "payload": {"level": "warning", "codes": ["E100"]}},
        null,
        {"kind": "metric", "payload": {"level": "info", "codes": []}},
        "standalone text"
    ]);
    let encoded = encode(&records);
    assert!(is_encoded(&encoded));
    assert_eq!(decode(&encoded), records);
}

#[test]
fn test_roundtrip_unicode_and_escapes() {
    let records = json!([
        {"msg": "línea \"uno\"\n"},
        {"msg": "línea \"uno\"\n"},
        {"msg": "日本語"}
    ]);
    assert_eq!(decode(&encode(&records)), records);
}

// ============================================================
// Pass-through
// ============================================================

#[test]
fn test_passthrough_small_inputs() {
    for records in [json!([]), json!([{"a": 1}]), json!([{"role": "admin"}, {"role": "admin"}])] {
        assert_eq!(encode(&records), records);
    }
}

#[test]
fn test_passthrough_decode_of_plain() {
    let records = json!([{"a": "unique1"}, {"a": "unique2"}, {"a": "unique3"}]);
    let out = encode(&records);
    assert_eq!(out, records);
    assert!(!is_encoded(&out));
    assert_eq!(decode(&out), records);
}

// ============================================================
// Dictionary minimality & id layout
// ============================================================

#[test]
fn test_every_id_referenced() {
    let encoded = encode(&employees(60));
    let schema = encoded["schema"].as_object().unwrap();
    let mut referenced = BTreeSet::new();
    collect_ints(&encoded["data"], &mut referenced);
    for id in schema.keys() {
        let id: u64 = id.parse().unwrap();
        assert!(referenced.contains(&id), "id {id} never referenced");
    }
}

#[test]
fn test_ids_dense_from_zero() {
    let encoded = encode(&employees(30));
    let ids: Vec<u64> = encoded["schema"]
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.parse().unwrap())
        .collect();
    let expected: Vec<u64> = (0..ids.len() as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_schema_holds_only_scalars() {
    let encoded = encode(&employees(30));
    for value in encoded["schema"].as_object().unwrap().values() {
        assert!(!value.is_array() && !value.is_object());
    }
}

#[test]
fn test_first_encounter_order() {
    let records = json!([
        {"b": "second", "a": "first"},
        {"b": "second", "a": "first"},
        {"b": "second", "a": "first"}
    ]);
    let encoded = encode(&records);
    assert_eq!(encoded["schema"]["0"], json!("second"));
    assert_eq!(encoded["schema"]["1"], json!("first"));
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn test_deterministic() {
    let records = employees(100);
    assert_eq!(encode(&records), encode(&records));
    assert_eq!(
        serde_json::to_string(&encode(&records)).unwrap(),
        serde_json::to_string(&encode(&records)).unwrap()
    );
}

// ============================================================
// Stats & pack
// ============================================================

#[test]
fn test_pack_reduces_repetitive_data() {
    let records = employees(500);
    let packed = pack_and_stats(&records);
    assert!(packed.stats.reduction > 0);
    assert!(packed.stats.compression_ratio > 0.0);
    assert!(packed.stats.compression_percentage.ends_with('%'));
    assert_eq!(packed.original, records);
}

#[test]
fn test_stats_of_passthrough_is_zero() {
    let records = json!([{"a": 1}]);
    let encoded = encode(&records);
    let s = stats(&records, &encoded);
    assert_eq!(s.reduction, 0);
    assert_eq!(s.compression_ratio, 0.0);
}

#[test]
fn test_pack_result_wire_names() {
    let v = serde_json::to_value(pack_and_stats(&employees(5))).unwrap();
    assert!(v.get("encoded").is_some());
    assert!(v["stats"].get("compressionRatio").is_some());
    assert!(v.get("original").is_some());
}

// ============================================================
// Configured codec
// ============================================================

#[test]
fn test_codec_min_records_override() {
    let codec = Codec::with_config(CodecConfig { min_records: 2, ..CodecConfig::default() });
    let records = json!([{"role": "admin"}, {"role": "admin"}]);
    match codec.encode_records(&records) {
        Encoded::Packed(packed) => {
            assert_eq!(packed.schema.len(), 1);
            assert_eq!(packed.data, vec![json!({"role": 0}), json!({"role": 0})]);
        }
        Encoded::Plain(_) => panic!("expected packed output"),
    }
    assert_eq!(codec.decode(&codec.encode(&records)), records);
}
