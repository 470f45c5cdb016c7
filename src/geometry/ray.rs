use crate::math::Vector3;

/// A half-line `origin + direction * t` for `t >= 0`.
///
/// `direction` is not required to be unit length; hit distances are then
/// measured in multiples of it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    #[must_use]
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray intersection query.
///
/// `location == ray.origin + ray.direction * t` for the ray that produced
/// the hit. `normal` is expected to be unit length but is not checked.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct RayHit {
    pub location: Vector3,
    pub normal: Vector3,
    pub t: f32,
}

impl RayHit {
    #[must_use]
    pub const fn new(location: Vector3, normal: Vector3, t: f32) -> Self {
        Self {
            location,
            normal,
            t,
        }
    }

    /// Builds a hit at parameter `t` along `ray`.
    #[must_use]
    pub fn from_ray(ray: &Ray, t: f32, normal: Vector3) -> Self {
        Self::new(ray.at(t), normal, t)
    }

    /// Returns the closer of two hits, preferring `self` on ties.
    #[must_use]
    pub fn nearest(self, other: Self) -> Self {
        if other.t < self.t {
            other
        } else {
            self
        }
    }
}
