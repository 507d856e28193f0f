//! Benchmarks for chart rendering and the estimate path
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use enrollment::chart::{BarChart, LineChart};
use enrollment::{monthly_trend_chart, predict, top_states_chart, Dataset, OutlierZone, PredictionInput};

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");
    let dataset = Dataset::sample();

    group.bench_function("top_states_svg", |b| {
        b.iter(|| top_states_chart(black_box(&dataset)).render())
    });

    group.bench_function("monthly_trend_svg", |b| {
        b.iter(|| monthly_trend_chart(black_box(&dataset)).render())
    });

    for size in [12, 120, 1200] {
        group.throughput(Throughput::Elements(size as u64));

        let line = (0..size).fold(LineChart::new(960, 480), |chart, i| {
            chart.point(i.to_string(), (i * 7919 % 1000) as f64)
        });
        group.bench_function(format!("line_{}", size), |b| b.iter(|| black_box(&line).render()));

        let bars = (0..size).fold(BarChart::new(960, 480), |chart, i| {
            chart.bar(format!("S{}", i), (i * 104729 % 1_000_000) as f64, "#4ECDC4")
        });
        group.bench_function(format!("bars_{}", size), |b| b.iter(|| black_box(&bars).render()));
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    c.bench_function("predict", |b| {
        let input = PredictionInput::new(50, 100, OutlierZone::No);
        b.iter(|| predict(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, bench_charts, bench_predict);
criterion_main!(benches);
