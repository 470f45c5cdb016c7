use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{Result, VectorError};

use super::Vector2;

/// A 2D vector of signed 32-bit components.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct IntVector2 {
    pub x: i32,
    pub y: i32,
}

/// A 2D vector of unsigned 32-bit components.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct UIntVector2 {
    pub x: u32,
    pub y: u32,
}

/// Alternate name for [`UIntVector2`].
pub type Vector2UI = UIntVector2;

impl IntVector2 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Reinterprets each component's bits as unsigned, so negative values
    /// wrap modulo 2^32 (`-1` becomes `u32::MAX`).
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn as_unsigned(self) -> UIntVector2 {
        UIntVector2::new(self.x as u32, self.y as u32)
    }

    /// Componentwise division that reports failures instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivideByZero`] naming the first zero
    /// component of `rhs`. Otherwise returns [`VectorError::Overflow`] for
    /// a component computing `i32::MIN / -1`.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.x == 0 {
            return Err(VectorError::DivideByZero { axis: 'x' }.into());
        }
        if rhs.y == 0 {
            return Err(VectorError::DivideByZero { axis: 'y' }.into());
        }
        let x = self
            .x
            .checked_div(rhs.x)
            .ok_or(VectorError::Overflow { axis: 'x' })?;
        let y = self
            .y
            .checked_div(rhs.y)
            .ok_or(VectorError::Overflow { axis: 'y' })?;
        Ok(Self::new(x, y))
    }
}

impl UIntVector2 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Reinterprets each component's bits as signed; values above
    /// `i32::MAX` wrap to negatives.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn as_signed(self) -> IntVector2 {
        IntVector2::new(self.x as i32, self.y as i32)
    }

    /// Number of cells in a grid of this size, widened so it cannot
    /// overflow.
    #[must_use]
    pub fn area(self) -> u64 {
        u64::from(self.x) * u64::from(self.y)
    }

    /// Componentwise division that reports a zero divisor instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivideByZero`] naming the first zero
    /// component of `rhs`.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        let x = self
            .x
            .checked_div(rhs.x)
            .ok_or(VectorError::DivideByZero { axis: 'x' })?;
        let y = self
            .y
            .checked_div(rhs.y)
            .ok_or(VectorError::DivideByZero { axis: 'y' })?;
        Ok(Self::new(x, y))
    }
}

impl From<IntVector2> for Vector2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: IntVector2) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<UIntVector2> for Vector2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: UIntVector2) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<[i32; 2]> for IntVector2 {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<IntVector2> for [i32; 2] {
    fn from(v: IntVector2) -> Self {
        [v.x, v.y]
    }
}

impl From<[u32; 2]> for UIntVector2 {
    fn from([x, y]: [u32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<UIntVector2> for [u32; 2] {
    fn from(v: UIntVector2) -> Self {
        [v.x, v.y]
    }
}

impl fmt::Display for IntVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for UIntVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for IntVector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IntVector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for IntVector2 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Componentwise quotient. Panics if either component of `rhs` is zero.
impl Div for IntVector2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Add for UIntVector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for UIntVector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<u32> for UIntVector2 {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Componentwise quotient. Panics if either component of `rhs` is zero.
impl Div for UIntVector2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::GmathError;

    #[test]
    fn componentwise_division() {
        let q = UIntVector2::new(1920, 1080) / UIntVector2::new(16, 9);
        assert_eq!(q, UIntVector2::new(120, 120));
        let q = IntVector2::new(-7, 9) / IntVector2::new(2, -4);
        assert_eq!(q, IntVector2::new(-3, -2));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn unsigned_division_by_zero_panics() {
        let _ = UIntVector2::new(4, 4) / UIntVector2::new(2, 0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn signed_division_by_zero_panics() {
        let _ = IntVector2::new(4, 4) / IntVector2::new(0, 1);
    }

    #[test]
    fn checked_division_reports_axis() {
        let err = UIntVector2::new(4, 4)
            .checked_div(UIntVector2::new(2, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            GmathError::Vector(VectorError::DivideByZero { axis: 'y' })
        ));

        let err = IntVector2::new(1, 1)
            .checked_div(IntVector2::new(0, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            GmathError::Vector(VectorError::DivideByZero { axis: 'x' })
        ));
    }

    #[test]
    fn checked_division_reports_overflow_not_zero_divisor() {
        let err = IntVector2::new(i32::MIN, 6)
            .checked_div(IntVector2::new(-1, 3))
            .unwrap_err();
        assert!(matches!(
            err,
            GmathError::Vector(VectorError::Overflow { axis: 'x' })
        ));

        let err = IntVector2::new(6, i32::MIN)
            .checked_div(IntVector2::new(3, -1))
            .unwrap_err();
        assert!(matches!(
            err,
            GmathError::Vector(VectorError::Overflow { axis: 'y' })
        ));
    }

    #[test]
    fn checked_division_prefers_zero_divisor_over_overflow() {
        let err = IntVector2::new(i32::MIN, 1)
            .checked_div(IntVector2::new(-1, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            GmathError::Vector(VectorError::DivideByZero { axis: 'y' })
        ));
    }

    #[test]
    fn checked_division_with_negative_divisor() {
        let q = IntVector2::new(i32::MIN + 1, -9)
            .checked_div(IntVector2::new(-1, 3))
            .unwrap();
        assert_eq!(q, IntVector2::new(i32::MAX, -3));
    }

    #[test]
    fn checked_division_succeeds() {
        let q = UIntVector2::new(10, 21).checked_div(UIntVector2::new(3, 7)).unwrap();
        assert_eq!(q, UIntVector2::new(3, 3));
    }

    #[test]
    fn negative_reinterprets_modulo_2_pow_32() {
        let u = IntVector2::new(-1, -2).as_unsigned();
        assert_eq!(u, UIntVector2::new(u32::MAX, u32::MAX - 1));
        assert_eq!(u.as_signed(), IntVector2::new(-1, -2));
    }

    #[test]
    fn unsigned_to_float_round_trip_below_2_pow_24() {
        let values = [0, 1, 255, 65_535, (1 << 24) - 1, 1 << 24];
        for &x in &values {
            let original = UIntVector2::new(x, (1 << 24) - x);
            let widened = Vector2::from(original);
            assert_eq!(widened.to_uint_vector_truncated(), original);
        }
    }

    #[test]
    fn signed_to_float_widening() {
        let v: Vector2 = IntVector2::new(-5, 12).into();
        assert_eq!(v, Vector2::new(-5.0, 12.0));
    }

    #[test]
    fn alias_is_same_type() {
        let a: Vector2UI = UIntVector2::new(3, 4);
        assert_eq!(a.area(), 12);
    }

    #[test]
    fn equal_vectors_hash_equal() {
        let mut set = HashSet::new();
        set.insert(IntVector2::new(1, 2));
        set.insert(IntVector2::new(1, 2));
        set.insert(IntVector2::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_format() {
        assert_eq!(IntVector2::new(-1, 2).to_string(), "(-1, 2)");
        assert_eq!(UIntVector2::new(640, 480).to_string(), "(640, 480)");
    }
}
