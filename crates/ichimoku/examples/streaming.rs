//! Streaming Example
//!
//! Feeds bars to an Ichimoku calculator one at a time, as a live feed
//! would, and prints each record along with the cloud projected ahead.
//!
//! Run with: `cargo run --example streaming`

#![allow(clippy::cast_precision_loss)]

use ::ichimoku::prelude::*;

fn main() -> Result<()> {
    let config = Ichimoku::new()
        .conversion_period(3)
        .base_period(6)
        .span_period(12)
        .displacement(4);
    let mut cloud = IchimokuCloud::<f64>::new(&config)?;

    println!("=== Streaming Ichimoku (3, 6, 12, 4) ===");
    println!();

    for i in 0..20 {
        let t = f64::from(i);
        let mid = 100.0 + 5.0 * (t * 0.4).sin() + t * 0.5;
        let bar = Bar::new(mid + 1.0, mid - 1.0);

        match cloud.step(bar) {
            None => {
                if let Phase::Warming { remaining } = cloud.phase() {
                    println!("bar {i:2}: warming up, {remaining} more needed");
                }
            }
            Some(record) => {
                let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
                println!(
                    "bar {i:2}: conversion {:.2}  base {:.2}  span A {}  span B {}",
                    record.conversion,
                    record.base,
                    fmt(record.span_a),
                    fmt(record.span_b),
                );
            }
        }
    }

    println!();
    println!("Cloud ahead of the last bar:");
    for (k, (a, b)) in cloud.projection().enumerate() {
        println!("  +{}: span A {a:.2}  span B {b:.2}", k + 1);
    }

    Ok(())
}
