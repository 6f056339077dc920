// crates/guide-core/benches/benchmarks.rs
use criterion::{criterion_group, criterion_main, Criterion};
use guide_core::map::{hover_district, FeatureCollection};
use guide_core::prelude::*;
use guide_core::text::normalize_name;
use std::hint::black_box;

fn bench_load(c: &mut Criterion) {
    c.bench_function("guide_embedded_parse", |b| {
        b.iter(|| Guide::embedded().unwrap())
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_name", |b| {
        b.iter(|| normalize_name(black_box("Vila Real de Santo António")))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let guide = Guide::embedded().unwrap();
    let districts = guide.districts_for("central-region");

    c.bench_function("resolve_exact", |b| {
        b.iter(|| resolve_district(black_box("Castelo Branco"), districts))
    });
    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolve_district(black_box("Atlantis"), districts))
    });
}

fn bench_hover_sweep(c: &mut Criterion) {
    let guide = Guide::embedded().unwrap();
    let path = Guide::default_map_dir().join("north-region-districts.json");
    let json = std::fs::read_to_string(path).unwrap();
    let map = FeatureCollection::from_json_str(&json).unwrap();
    let districts = guide.districts_for("north-region");

    // One pointer pass across every feature of the map.
    c.bench_function("hover_sweep_north", |b| {
        b.iter(|| {
            map.features
                .iter()
                .filter_map(|f| hover_district(f, districts))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_normalize,
    bench_resolve,
    bench_hover_sweep
);
criterion_main!(benches);
