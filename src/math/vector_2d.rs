use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{hash_f32, IntVector2, UIntVector2};

/// A 2D vector of single-precision components.
///
/// Equality is exact per component. NaN and infinities propagate through
/// arithmetic per IEEE-754.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product of the
    /// vectors extended with `z = 0`).
    #[must_use]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Squared Euclidean length. Avoids the square root of [`Self::length`].
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector in the same direction, or `None` for a
    /// zero-length vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(self / len)
    }

    /// Componentwise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Truncates each component toward zero.
    ///
    /// Components outside the `i32` range saturate and NaN becomes `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int_vector_truncated(self) -> IntVector2 {
        IntVector2::new(self.x as i32, self.y as i32)
    }

    /// Truncates each component toward zero.
    ///
    /// Negative components saturate to `0`, components above `u32::MAX`
    /// saturate to `u32::MAX` and NaN becomes `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_uint_vector_truncated(self) -> UIntVector2 {
        UIntVector2::new(self.x as u32, self.y as u32)
    }
}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.x, state);
        hash_f32(self.y, state);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<nalgebra::Vector2<f32>> for Vector2 {
    fn from(v: nalgebra::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f32> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
