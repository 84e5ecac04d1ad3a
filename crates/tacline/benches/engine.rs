//! Counting and generation benchmarks
//!
//! Run with: cargo bench --package tacline

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tacline::{MercatorViewport, Point, RenderConfig, SymbolFamily, try_count, try_generate};

/// A meandering polyline of `n` anchors, roughly 60 px per segment.
fn meander(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new(t * 50.0, 200.0 + (t * 0.7).sin() * 80.0)
        })
        .collect()
}

const FAMILIES: [SymbolFamily; 8] = [
    SymbolFamily::Boundary,
    SymbolFamily::Flot,
    SymbolFamily::Reef,
    SymbolFamily::Squall,
    SymbolFamily::Atditchm,
    SymbolFamily::Triple,
    SymbolFamily::Aaaaa,
    SymbolFamily::Retain,
];

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    let anchors = meander(50);

    for family in FAMILIES {
        let config = RenderConfig::new(family).with_thickness(2.0);
        group.bench_with_input(BenchmarkId::from_parameter(family), &anchors, |b, anchors| {
            b.iter(|| try_count(&config, black_box(anchors)))
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let anchors = meander(50);

    for family in FAMILIES {
        let config = RenderConfig::new(family).with_thickness(2.0);
        let points = try_count(&config, &anchors).unwrap_or(0);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(family), &anchors, |b, anchors| {
            b.iter(|| try_generate(&config, black_box(anchors)))
        });
    }
    group.finish();
}

fn bench_geodesic_arcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesic");
    let anchors = vec![Point::new(400.0, 400.0), Point::new(520.0, 380.0), Point::new(380.0, 520.0)];
    let view = Arc::new(MercatorViewport::new(-0.1, 51.5, 2.0));

    for family in [SymbolFamily::Retain, SymbolFamily::Seize, SymbolFamily::Cluster] {
        let planar = RenderConfig::new(family);
        let geodesic = RenderConfig::new(family).with_geo(view.clone());
        group.bench_function(format!("{family}_planar"), |b| {
            b.iter(|| try_generate(&planar, black_box(&anchors)))
        });
        group.bench_function(format!("{family}_geodesic"), |b| {
            b.iter(|| try_generate(&geodesic, black_box(&anchors)))
        });
    }
    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_count, bench_generate, bench_geodesic_arcs);
criterion_main!(benches);
