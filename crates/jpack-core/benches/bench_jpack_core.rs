use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jpack_core::{decode, encode, Codec};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::{json, Value};

const ROLES: &[&str] = &["admin", "user", "viewer", "editor"];
const CITIES: &[&str] = &["New York", "Berlin", "Tokyo", "São Paulo", "Lagos"];

fn generate_records(n: usize) -> Value {
    let mut rng = StdRng::seed_from_u64(7);
    Value::Array(
        (0..n)
            .map(|i| {
                let second = if rng.gen_bool(0.5) { "write" } else { "comment" };
                json!({
                    "id": 100_000 + i,
                    "name": format!("User {}", rng.gen_range(0..50)),
                    "role": ROLES[rng.gen_range(0..ROLES.len())],
                    "active": rng.gen_bool(0.7),
                    "location": {"city": CITIES[rng.gen_range(0..CITIES.len())]},
                    "permissions": ["read", second],
                })
            })
            .collect(),
    )
}

fn bench_encode(c: &mut Criterion) {
    for &n in &[100usize, 1_000, 10_000] {
        let records = generate_records(n);
        c.bench_function(&format!("encode_{n}_records"), |b| {
            b.iter(|| black_box(encode(black_box(&records))))
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    for &n in &[100usize, 1_000, 10_000] {
        let encoded = encode(&generate_records(n));
        c.bench_function(&format!("decode_{n}_records"), |b| {
            b.iter(|| black_box(decode(black_box(&encoded))))
        });
    }
}

fn bench_pack(c: &mut Criterion) {
    let records = generate_records(1_000);
    let codec = Codec::new();
    c.bench_function("pack_1000_records", |b| {
        b.iter(|| black_box(codec.pack(black_box(&records))))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_pack);
criterion_main!(benches);
