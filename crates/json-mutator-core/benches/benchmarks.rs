//! Criterion benchmarks for the mutation engine.
//!
//! Fixtures are pre-parsed outside the benchmark loop to measure only the
//! traversal and strategy work, not JSON parsing or file I/O.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use json_mutator_core::{mutate_with_rng, OutputFormat};

fn flat_fixture() -> (Value, Value) {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer" },
            "score": { "type": "number" },
            "active": { "type": "boolean" }
        }
    });
    let sample = json!({ "name": "Ada Lovelace", "age": 36, "score": 9.5, "active": true });
    (schema, sample)
}

fn wide_array_fixture() -> (Value, Value) {
    let schema = json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "integer" },
                "label": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } }
            }
        }
    });
    let items: Vec<Value> = (0..256)
        .map(|i| json!({ "id": i, "label": format!("item-{i}"), "tags": ["a", "b", "c"] }))
        .collect();
    (schema, Value::Array(items))
}

fn bench_mutate_flat(c: &mut Criterion) {
    let (schema, sample) = flat_fixture();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("mutate/flat_x100", |b| {
        b.iter(|| mutate_with_rng(black_box(&schema), black_box(&sample), 100, &mut rng))
    });
}

fn bench_mutate_wide_array(c: &mut Criterion) {
    let (schema, sample) = wide_array_fixture();
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("mutate/wide_array", |b| {
        b.iter(|| mutate_with_rng(black_box(&schema), black_box(&sample), 1, &mut rng))
    });
}

fn bench_render_pretty(c: &mut Criterion) {
    let (schema, sample) = wide_array_fixture();
    let mut rng = StdRng::seed_from_u64(3);
    let payloads = mutate_with_rng(&schema, &sample, 1, &mut rng);

    c.bench_function("render/pretty_wide_array", |b| {
        b.iter(|| black_box(&payloads[0]).to_json_string(OutputFormat::Pretty))
    });
}

criterion_group!(
    benches,
    bench_mutate_flat,
    bench_mutate_wide_array,
    bench_render_pretty
);
criterion_main!(benches);
