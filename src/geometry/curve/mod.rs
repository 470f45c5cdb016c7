mod bezier;

pub use bezier::{
    evaluate_bezier, evaluate_bezier_2d, evaluate_bezier_3d, BezierPoint, CubicBezier,
};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f32,
    /// End of the parameter range.
    pub t_max: f32,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f32, t_max: f32) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves.
///
/// Evaluation is total: parameters outside [`Curve::domain`] are
/// extrapolated rather than rejected.
pub trait Curve {
    /// Point type the curve lives in.
    type Point;

    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f32) -> Self::Point;

    /// First derivative with respect to `t`. Not normalized.
    fn derivative(&self, t: f32) -> Self::Point;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
