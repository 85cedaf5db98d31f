//! Times repeated GJK queries between two overlapping and two separated
//! squares.
//!
//! ```text
//! cargo run --release --example collision_bench            # 1_000_000 rounds
//! cargo run --release --example collision_bench -- 50000   # custom round count
//! RUST_LOG=convex2d=trace cargo run --example collision_bench -- 3
//! ```

use std::time::Instant;

use convex2d::geometry::ConvexPolygon;
use convex2d::math::Point2;
use convex2d::Result;

const DEFAULT_ROUNDS: u32 = 1_000_000;

fn square(x: f64, y: f64, side: f64) -> Result<ConvexPolygon> {
    ConvexPolygon::new(vec![
        Point2::new(x, y),
        Point2::new(x + side, y),
        Point2::new(x + side, y + side),
        Point2::new(x, y + side),
    ])
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the benchmark itself.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("collision_bench=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rounds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);

    let rect1 = square(0.0, 0.0, 10.0)?;
    let rect2 = square(5.0, 5.0, 10.0)?;
    let rect3 = square(20.0, 20.0, 10.0)?;

    let start = Instant::now();
    let mut hits = 0_u32;
    for _ in 0..rounds {
        if rect1.intersects(&rect2)? {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();
    tracing::info!(
        rounds,
        hits,
        total_ms = elapsed.as_secs_f64() * 1e3,
        per_test_ns = elapsed.as_secs_f64() * 1e9 / f64::from(rounds.max(1)),
        "intersection tests between two overlapping rectangles"
    );

    let start = Instant::now();
    let mut total = 0.0;
    for _ in 0..rounds {
        total += rect1.distance_to(&rect3)?;
    }
    let elapsed = start.elapsed();
    tracing::info!(
        rounds,
        mean_distance = total / f64::from(rounds.max(1)),
        total_ms = elapsed.as_secs_f64() * 1e3,
        per_test_ns = elapsed.as_secs_f64() * 1e9 / f64::from(rounds.max(1)),
        "distance queries between two separated rectangles"
    );

    Ok(())
}
