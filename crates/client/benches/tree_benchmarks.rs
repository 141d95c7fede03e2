//! Benchmarks for tree normalization, flattening and rendering.
//!
//! Inputs are search responses of increasing page size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use es_client::JsonTree;
use std::hint::black_box;

fn generate_search_response(hits: usize) -> serde_json::Value {
    let docs: Vec<serde_json::Value> = (0..hits)
        .map(|i| {
            serde_json::json!({
                "_index": "logs-2024",
                "_id": format!("doc-{}", i),
                "_score": 1.0,
                "_source": {
                    "@timestamp": "2024-03-01T10:00:00Z",
                    "message": format!("event number {}", i),
                    "level": "info",
                    "host": {"name": "web-1", "ip": ["10.0.0.1", "10.0.0.2"]},
                    "tags": ["prod", "eu-west"],
                    "latency_ms": 12.5,
                    "success": true,
                    "error": null
                }
            })
        })
        .collect();

    serde_json::json!({
        "took": 3,
        "timed_out": false,
        "hits": {"total": {"value": hits, "relation": "eq"}, "hits": docs}
    })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for hits in [10, 100, 1000] {
        let response = generate_search_response(hits);
        group.bench_with_input(BenchmarkId::from_parameter(hits), &response, |b, response| {
            b.iter(|| black_box(JsonTree::from_value(black_box(response))))
        });
    }
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let tree = JsonTree::from_value(&generate_search_response(100));
    c.bench_function("flatten_100_hits", |b| b.iter(|| black_box(tree.flatten())));
}

fn bench_render(c: &mut Criterion) {
    let tree = JsonTree::from_value(&generate_search_response(100));
    c.bench_function("render_100_hits_full", |b| {
        b.iter(|| black_box(tree.render(None)))
    });
    c.bench_function("render_100_hits_depth_2", |b| {
        b.iter(|| black_box(tree.render(Some(2))))
    });
}

criterion_group!(benches, bench_normalize, bench_flatten, bench_render);
criterion_main!(benches);
