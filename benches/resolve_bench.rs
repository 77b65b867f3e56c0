use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vis_resolver::api::{XyChart, XyChartConfig, XyViewProperties};
use vis_resolver::core::{ColumnData, FluxTable, Table, format_number};

fn bench_format_number(c: &mut Criterion) {
    c.bench_function("format_number_mixed_magnitudes", |b| {
        b.iter(|| {
            for value in [0.0324, -0.5, 1.0, 1_200.0, 2_452_000.0, -7.2e12] {
                let _ = format_number(black_box(value));
            }
        })
    });
}

fn bench_resolve_xy_10k(c: &mut Criterion) {
    let rows = 10_000;
    let table = Table::builder()
        .column("_start", ColumnData::Time(vec![0.0; rows]))
        .and_then(|b| b.column("_stop", ColumnData::Time(vec![1.0e7; rows])))
        .and_then(|b| {
            b.column(
                "result",
                ColumnData::String((0..rows).map(|i| format!("q{}", i % 3)).collect()),
            )
        })
        .and_then(|b| {
            b.column(
                "_time",
                ColumnData::Time((0..rows).map(|i| i as f64 * 1_000.0).collect()),
            )
        })
        .and_then(|b| {
            b.column(
                "_value",
                ColumnData::Number((0..rows).map(|i| (i as f64 * 0.01).sin()).collect()),
            )
        })
        .expect("valid table")
        .build();
    let data = FluxTable::new(table, ["_start", "_stop"]);
    let properties = XyViewProperties::default();
    let mut chart = XyChart::new(XyChartConfig::default()).expect("chart init");

    c.bench_function("resolve_xy_10k", |b| {
        b.iter(|| {
            let _ = chart.resolve(black_box(&data), black_box(&properties));
        })
    });
}

criterion_group!(benches, bench_format_number, bench_resolve_xy_10k);
criterion_main!(benches);
