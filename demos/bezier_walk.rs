//! Walks a cubic Bezier curve and logs sampled points, arc length and the
//! winding of the control polygon.
//!
//! Usage:
//! ```text
//! cargo run --example bezier_walk             # 8 segments
//! cargo run --example bezier_walk -- 32       # 32 segments
//! RUST_LOG=bezier_walk=debug cargo run --example bezier_walk
//! ```

use gmath::geometry::{CubicBezier, Curve, Ray, RayHit, Winding};
use gmath::math::{compute_normal_unnormalized, UIntVector2, Vector2, Vector3};

fn main() -> gmath::Result<()> {
    // Default: WARN for everything, INFO for this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("bezier_walk=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let segments = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(8);

    let curve = CubicBezier::new(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 3.0),
        Vector2::new(4.0, -2.0),
        Vector2::new(5.0, 1.0),
    );

    let points = curve.sample(segments);
    for (i, point) in points.iter().enumerate() {
        tracing::debug!(i, %point, tangent = %curve.derivative(i as f32 / segments.max(1) as f32), "sample");
    }
    let length: f32 = points.windows(2).map(|w| (w[1] - w[0]).length()).sum();
    tracing::info!(segments, length, "polyline approximation of the curve");

    let winding = Winding::of(curve.start, curve.start_control, curve.end_control);
    tracing::info!(%winding, "control polygon turn");

    // Map the curve onto a pixel grid.
    let grid = UIntVector2::new(640, 480);
    let cell = grid.checked_div(UIntVector2::new(64, 48))?;
    tracing::info!(%grid, %cell, cells = grid.area(), "pixel grid");

    let lifted = CubicBezier::new(
        Vector3::new(curve.start.x, curve.start.y, 0.0),
        Vector3::new(curve.start_control.x, curve.start_control.y, 1.0),
        Vector3::new(curve.end_control.x, curve.end_control.y, 1.0),
        Vector3::new(curve.end.x, curve.end.y, 0.0),
    );
    let ray = Ray::new(Vector3::new(2.5, 0.0, 10.0), -Vector3::UNIT_Z);
    let normal = compute_normal_unnormalized(lifted.start, lifted.end, lifted.evaluate(0.5));
    let hit = RayHit::from_ray(&ray, 10.0 - lifted.evaluate(0.5).z, normal);
    tracing::info!(location = %hit.location, normal = %hit.normal, t = hit.t, "ray hit");

    Ok(())
}
