use std::ops::{Add, Mul, Sub};

use crate::math::{Vector2, Vector3};

use super::{Curve, CurveDomain};

/// A point type a cubic Bezier curve can blend.
pub trait BezierPoint:
    Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
}

impl BezierPoint for Vector2 {}
impl BezierPoint for Vector3 {}

/// Evaluates a cubic Bezier curve at parameter `t` in the Bernstein basis:
///
/// `u³·start + 3u²t·start_control + 3ut²·end_control + t³·end`, `u = 1 - t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
#[must_use]
pub fn evaluate_bezier<V: BezierPoint>(
    t: f32,
    start: V,
    end: V,
    start_control: V,
    end_control: V,
) -> V {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;

    start * (uu * u)
        + start_control * (3.0 * uu * t)
        + end_control * (3.0 * u * tt)
        + end * (tt * t)
}

/// [`evaluate_bezier`] over 2D points.
#[must_use]
pub fn evaluate_bezier_2d(
    t: f32,
    start: Vector2,
    end: Vector2,
    start_control: Vector2,
    end_control: Vector2,
) -> Vector2 {
    evaluate_bezier(t, start, end, start_control, end_control)
}

/// [`evaluate_bezier`] over 3D points.
#[must_use]
pub fn evaluate_bezier_3d(
    t: f32,
    start: Vector3,
    end: Vector3,
    start_control: Vector3,
    end_control: Vector3,
) -> Vector3 {
    evaluate_bezier(t, start, end, start_control, end_control)
}

/// A cubic Bezier segment.
///
/// The curve passes through `start` (t = 0) and `end` (t = 1); the control
/// points shape it without lying on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier<V> {
    pub start: V,
    pub start_control: V,
    pub end_control: V,
    pub end: V,
}

impl<V: BezierPoint> CubicBezier<V> {
    /// Creates a new segment. Arguments follow curve order.
    #[must_use]
    pub fn new(start: V, start_control: V, end_control: V, end: V) -> Self {
        Self {
            start,
            start_control,
            end_control,
            end,
        }
    }

    /// The same curve traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.end_control, self.start_control, self.start)
    }

    /// Returns `segments + 1` points at evenly spaced parameters, including
    /// both endpoints. Zero segments yields just the start point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, segments: usize) -> Vec<V> {
        if segments == 0 {
            return vec![self.start];
        }
        let step = 1.0 / segments as f32;
        (0..=segments)
            .map(|i| {
                if i == segments {
                    self.end
                } else {
                    self.evaluate(i as f32 * step)
                }
            })
            .collect()
    }
}

impl<V: BezierPoint> Curve for CubicBezier<V> {
    type Point = V;

    fn evaluate(&self, t: f32) -> V {
        evaluate_bezier(t, self.start, self.end, self.start_control, self.end_control)
    }

    fn derivative(&self, t: f32) -> V {
        let u = 1.0 - t;
        (self.start_control - self.start) * (3.0 * u * u)
            + (self.end_control - self.start_control) * (6.0 * u * t)
            + (self.end - self.end_control) * (3.0 * t * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f32 = 1e-5;

    fn s_curve() -> CubicBezier<Vector2> {
        CubicBezier::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 3.0),
            Vector2::new(4.0, -2.0),
            Vector2::new(5.0, 1.0),
        )
    }

    fn assert_close_2d(a: Vector2, b: Vector2) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = TOL);
        assert_abs_diff_eq!(a.y, b.y, epsilon = TOL);
    }

    #[test]
    fn endpoints_are_interpolated() {
        let c = s_curve();
        assert_close_2d(
            evaluate_bezier_2d(0.0, c.start, c.end, c.start_control, c.end_control),
            c.start,
        );
        assert_close_2d(
            evaluate_bezier_2d(1.0, c.start, c.end, c.start_control, c.end_control),
            c.end,
        );
    }

    #[test]
    fn endpoints_are_interpolated_3d() {
        let start = Vector3::new(1.0, -2.0, 0.5);
        let end = Vector3::new(-3.0, 4.0, 9.0);
        let c1 = Vector3::new(7.0, 7.0, 7.0);
        let c2 = Vector3::new(-7.0, 0.0, 2.0);
        assert!(evaluate_bezier_3d(0.0, start, end, c1, c2).abs_diff_eq(start, TOL));
        assert!(evaluate_bezier_3d(1.0, start, end, c1, c2).abs_diff_eq(end, TOL));
    }

    #[test]
    fn linear_midpoint() {
        let p = evaluate_bezier_2d(
            0.5,
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
        );
        assert_close_2d(p, Vector2::new(5.0, 0.0));
    }

    #[test]
    fn symmetric_curve_midpoint() {
        // Control polygon (0,0) (0,4) (4,4) (4,0): B(0.5) = (2, 3).
        let p = evaluate_bezier_2d(
            0.5,
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 4.0),
            Vector2::new(4.0, 4.0),
        );
        assert_close_2d(p, Vector2::new(2.0, 3.0));
    }

    #[test]
    fn parameter_is_not_clamped() {
        // Evenly spaced collinear controls give B(t) = (9t, 0).
        let start = Vector2::ZERO;
        let c1 = Vector2::new(3.0, 0.0);
        let c2 = Vector2::new(6.0, 0.0);
        let end = Vector2::new(9.0, 0.0);
        assert_close_2d(evaluate_bezier_2d(2.0, start, end, c1, c2), Vector2::new(18.0, 0.0));
        assert_close_2d(evaluate_bezier_2d(-1.0, start, end, c1, c2), Vector2::new(-9.0, 0.0));
    }

    #[test]
    fn nan_parameter_propagates() {
        let c = s_curve();
        let p = c.evaluate(f32::NAN);
        assert!(p.x.is_nan() && p.y.is_nan());
    }

    #[test]
    fn derivative_at_endpoints_points_at_controls() {
        let c = s_curve();
        assert_close_2d(c.derivative(0.0), (c.start_control - c.start) * 3.0);
        assert_close_2d(c.derivative(1.0), (c.end - c.end_control) * 3.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let c = s_curve();
        let t = 0.3;
        let h = 1e-3;
        let numeric = (c.evaluate(t + h) - c.evaluate(t - h)) * (1.0 / (2.0 * h));
        let analytic = c.derivative(t);
        assert_abs_diff_eq!(numeric.x, analytic.x, epsilon = 1e-2);
        assert_abs_diff_eq!(numeric.y, analytic.y, epsilon = 1e-2);
    }

    #[test]
    fn reversed_traces_same_points() {
        let c = s_curve();
        let r = c.reversed();
        for t in [0.0, 0.25, 0.5, 0.8, 1.0] {
            assert_close_2d(c.evaluate(t), r.evaluate(1.0 - t));
        }
    }

    #[test]
    fn sample_includes_both_endpoints() {
        let c = s_curve();
        let points = c.sample(4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], c.start);
        assert_eq!(points[4], c.end);
        assert_close_2d(points[2], c.evaluate(0.5));
        assert_eq!(c.sample(0), vec![c.start]);
    }

    #[test]
    fn domain_and_closure() {
        let c = s_curve();
        assert_eq!(c.domain(), CurveDomain::new(0.0, 1.0));
        assert!(!c.is_closed());
        let loop_curve = CubicBezier::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::ZERO);
        assert!(loop_curve.is_closed());
    }
}
