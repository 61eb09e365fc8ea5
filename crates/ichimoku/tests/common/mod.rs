//! Shared test utilities for ichimoku tests.
//!
//! Includes a brute-force reference calculator that rescans every window on
//! every bar, used as ground truth for the streaming implementation.

use ichimoku::utils::approx_eq;
use ichimoku::{Bar, Ichimoku, IchimokuRecord};

/// Bars with `high = low = 100 + i`.
#[allow(dead_code)]
pub fn trending_bars(n: usize) -> Vec<Bar<f64>> {
    (0..n)
        .map(|i| {
            let price = 100.0 + i as f64;
            Bar::new(price, price)
        })
        .collect()
}

/// Deterministic oscillating bars with a non-trivial high/low spread.
#[allow(dead_code)]
pub fn oscillating_bars(n: usize) -> Vec<Bar<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let mid = 100.0 + 10.0 * (t * 0.1).sin() + 3.0 * (t * 0.37).cos();
            let spread = 1.0 + (t * 0.23).sin().abs();
            Bar::new(mid + spread, mid - spread)
        })
        .collect()
}

/// Midpoint of the `period` bars ending at `end` (inclusive), by full scan.
#[allow(dead_code)]
pub fn naive_midpoint(bars: &[Bar<f64>], end: usize, period: usize) -> f64 {
    let start = (end + 1).saturating_sub(period);
    let window = &bars[start..=end];
    let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    (highest + lowest) / 2.0
}

/// Brute-force Ichimoku over oldest-first bars.
#[allow(dead_code)]
pub fn reference_records(bars: &[Bar<f64>], config: &Ichimoku) -> Vec<IchimokuRecord<f64>> {
    let warmup = config.warmup();
    let displacement = config.get_displacement();
    if bars.len() < warmup {
        return Vec::new();
    }

    let mut raw = Vec::new();
    let mut records = Vec::new();
    for end in (warmup - 1)..bars.len() {
        let conversion = naive_midpoint(bars, end, config.get_conversion_period());
        let base = naive_midpoint(bars, end, config.get_base_period());
        let span_b = naive_midpoint(bars, end, config.get_span_period());
        raw.push(((conversion + base) / 2.0, span_b));

        let n = raw.len() - 1;
        let released = (n >= displacement).then(|| raw[n - displacement]);
        records.push(IchimokuRecord {
            conversion,
            base,
            span_a: released.map(|(a, _)| a),
            span_b: released.map(|(_, b)| b),
        });
    }
    records
}

/// Compares two record sequences value by value.
#[allow(dead_code)]
pub fn records_approx_eq(
    actual: &[IchimokuRecord<f64>],
    expected: &[IchimokuRecord<f64>],
    eps: f64,
) -> bool {
    let opt_eq = |a: Option<f64>, b: Option<f64>| match (a, b) {
        (Some(a), Some(b)) => approx_eq(a, b, eps),
        (None, None) => true,
        _ => false,
    };
    actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(a, e)| {
            approx_eq(a.conversion, e.conversion, eps)
                && approx_eq(a.base, e.base, eps)
                && opt_eq(a.span_a, e.span_a)
                && opt_eq(a.span_b, e.span_b)
        })
}
