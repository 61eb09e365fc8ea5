//! Performance benchmarks for the Ichimoku calculator.
//!
//! Run with: `cargo bench -p ichimoku`
//!
//! Measures throughput of the streaming, record and columnar entry points
//! across input sizes to confirm linear scaling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ::ichimoku::indicators::ichimoku::{ichimoku, ichimoku_into, Ichimoku, IchimokuCloud, IchimokuOutput};
use ::ichimoku::kernels::RollingWindow;
use ::ichimoku::Bar;

/// Generate deterministic high/low columns for benchmarks.
fn generate_high_low(size: usize) -> (Vec<f64>, Vec<f64>) {
    let mut high = Vec::with_capacity(size);
    let mut low = Vec::with_capacity(size);

    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = price.max(10.0);

        high.push(price + 1.0 + (i as f64 * 0.07).sin().abs());
        low.push(price - 1.0 - (i as f64 * 0.05).cos().abs());
    }

    (high, low)
}

fn generate_bars(size: usize) -> Vec<Bar<f64>> {
    let (high, low) = generate_high_low(size);
    high.into_iter().zip(low).map(Bar::from).collect()
}

// Standard sizes for benchmarking
const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("ichimoku_streaming");
    let config = Ichimoku::default();
    for &size in SIZES {
        let bars = generate_bars(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bars, |b, bars| {
            b.iter(|| {
                let mut cloud = IchimokuCloud::<f64>::new(&config).unwrap();
                let mut last = None;
                for &bar in bars {
                    last = cloud.step(black_box(bar)).or(last);
                }
                last
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ichimoku_batch");
    let config = Ichimoku::default();
    for &size in SIZES {
        let bars = generate_bars(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bars, |b, bars| {
            b.iter(|| ichimoku(black_box(bars), black_box(&config)))
        });
    }
    group.finish();
}

fn bench_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("ichimoku_into");
    let config = Ichimoku::default();
    for &size in SIZES {
        let (high, low) = generate_high_low(size);
        let mut output = IchimokuOutput::with_len(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(high, low),
            |b, (high, low)| {
                b.iter(|| ichimoku_into(black_box(high), black_box(low), &config, &mut output))
            },
        );
    }
    group.finish();
}

/// Window cost should not grow with the period
fn bench_window_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_window_period");
    let (high, _) = generate_high_low(100_000);
    for &period in &[9_usize, 52, 500, 5_000] {
        group.throughput(Throughput::Elements(high.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(period), &period, |b, &period| {
            b.iter(|| {
                let mut window = RollingWindow::new(period).unwrap();
                let mut acc = 0.0;
                for &value in &high {
                    window.push(black_box(value));
                    acc += window.max().unwrap_or(0.0);
                }
                acc
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_streaming,
    bench_batch,
    bench_into,
    bench_window_period
);
criterion_main!(benches);
