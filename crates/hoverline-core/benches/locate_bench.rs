use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hoverline_core::{nearest_index, nearest_index_linear, DataPoint, Series};

fn build_series(n: usize) -> Series {
    let data: Vec<DataPoint> = (0..n as i64)
        .map(|i| DataPoint::from_millis(1_700_000_000_000 + i * 60_000, (i % 97) as f64).unwrap())
        .collect();
    Series::new(&data).unwrap()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_index");
    for &n in &[200usize, 10_000usize, 1_000_000usize] {
        let series = build_series(n);
        let (lo, hi) = series.time_extent().unwrap();
        let targets: Vec<f64> = (0..64).map(|k| lo + (hi - lo) * k as f64 / 63.0 + 17_000.0).collect();

        group.bench_with_input(BenchmarkId::new("bisect", n), &targets, |b, ts| {
            b.iter(|| {
                for &t in ts {
                    black_box(nearest_index(series.points(), t));
                }
            });
        });
        if n <= 10_000 {
            group.bench_with_input(BenchmarkId::new("linear", n), &targets, |b, ts| {
                b.iter(|| {
                    for &t in ts {
                        black_box(nearest_index_linear(series.points(), t));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
