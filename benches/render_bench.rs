//! Benchmarks for Chartwatch series generation and rendering
//!
//! Run with: cargo bench

use chartwatch::series::{generate, MetricId};
use chartwatch::view::{Renderer, Selection};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let as_of = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    for length in [30i64, 90, 3650] {
        group.throughput(Throughput::Elements(length as u64));

        group.bench_function(format!("prediction_markets_{}", length), |b| {
            b.iter(|| {
                generate(
                    black_box(MetricId::PredictionMarkets),
                    black_box(as_of),
                    Some(length),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let as_of = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let renderer = Renderer::default();

    group.bench_function("home", |b| {
        b.iter(|| {
            renderer
                .render_selection(black_box(Selection::Home), black_box(as_of))
                .unwrap()
        })
    });

    for metric in [MetricId::X402Volume, MetricId::VaultAum, MetricId::BlobFees] {
        group.bench_function(format!("metric_{}", metric), |b| {
            b.iter(|| renderer.render(black_box(metric), black_box(as_of)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_render);
criterion_main!(benches);
