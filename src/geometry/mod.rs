pub mod curve;
pub mod ray;
pub mod tags;

pub use curve::{
    evaluate_bezier, evaluate_bezier_2d, evaluate_bezier_3d, BezierPoint, CubicBezier, Curve,
    CurveDomain,
};
pub use ray::{Ray, RayHit};
pub use tags::{AngleType, ContainmentType, Winding};
