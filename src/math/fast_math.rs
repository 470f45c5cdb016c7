use super::Vector3;

/// Right-handed 3D cross product `a x b`.
#[must_use]
#[inline]
pub fn cross_product_3d(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Face normal of the triangle `(p1, p2, p3)` as `(p3 - p1) x (p2 - p1)`.
///
/// The result is NOT normalized: its magnitude is twice the triangle
/// area. Divide by [`Vector3::length`] when a unit normal is needed.
#[must_use]
#[inline]
pub fn compute_normal_unnormalized(p1: Vector3, p2: Vector3, p3: Vector3) -> Vector3 {
    cross_product_3d(p3 - p1, p2 - p1)
}

/// Area of the triangle `(p1, p2, p3)`.
#[must_use]
pub fn triangle_area(p1: Vector3, p2: Vector3, p3: Vector3) -> f32 {
    compute_normal_unnormalized(p1, p2, p3).length() * 0.5
}
