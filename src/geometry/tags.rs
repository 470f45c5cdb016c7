//! Classification tags consumed by geometry code.
//!
//! Discriminants are stable and may be stored or sent across boundaries;
//! decode them with `TryFrom<u8>`.

use std::f32::consts::TAU;
use std::fmt;

use crate::error::TagError;
use crate::math::{Vector2, TOLERANCE};

/// Unit an angle value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AngleType {
    Revolution = 0,
    Degree = 1,
    Radian = 2,
    Gradian = 3,
}

impl AngleType {
    /// How many of this unit make one full turn.
    #[must_use]
    pub fn units_per_revolution(self) -> f32 {
        match self {
            Self::Revolution => 1.0,
            Self::Degree => 360.0,
            Self::Radian => TAU,
            Self::Gradian => 400.0,
        }
    }

    /// Converts `value` from this unit to `to`.
    #[must_use]
    pub fn convert(self, value: f32, to: AngleType) -> f32 {
        if self == to {
            return value;
        }
        value / self.units_per_revolution() * to.units_per_revolution()
    }
}

/// Rotational order of three or more points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Winding {
    Clockwise = 0,
    CounterClockwise = 1,
    Collinear = 2,
}

impl Winding {
    /// Classifies the turn `a -> b -> c` in a y-up frame.
    ///
    /// The points count as collinear when the sine of the angle at `a` is
    /// within [`TOLERANCE`], so the result does not depend on scale.
    /// Coincident points are collinear.
    #[must_use]
    pub fn of(a: Vector2, b: Vector2, c: Vector2) -> Self {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.perp_dot(ac);
        let limit = TOLERANCE * TOLERANCE * ab.length_squared() * ac.length_squared();
        if cross * cross <= limit {
            Self::Collinear
        } else if cross > 0.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    /// The opposite orientation. Collinear stays collinear.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Collinear => Self::Collinear,
        }
    }
}

/// How one shape relates to another in a containment query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContainmentType {
    Disjoint = 0,
    Contains = 1,
    Intersects = 2,
}

impl TryFrom<u8> for AngleType {
    type Error = TagError;

    fn try_from(ordinal: u8) -> Result<Self, TagError> {
        match ordinal {
            0 => Ok(Self::Revolution),
            1 => Ok(Self::Degree),
            2 => Ok(Self::Radian),
            3 => Ok(Self::Gradian),
            _ => Err(TagError::UnknownOrdinal {
                tag: "AngleType",
                ordinal,
            }),
        }
    }
}

impl TryFrom<u8> for Winding {
    type Error = TagError;

    fn try_from(ordinal: u8) -> Result<Self, TagError> {
        match ordinal {
            0 => Ok(Self::Clockwise),
            1 => Ok(Self::CounterClockwise),
            2 => Ok(Self::Collinear),
            _ => Err(TagError::UnknownOrdinal {
                tag: "Winding",
                ordinal,
            }),
        }
    }
}

impl TryFrom<u8> for ContainmentType {
    type Error = TagError;

    fn try_from(ordinal: u8) -> Result<Self, TagError> {
        match ordinal {
            0 => Ok(Self::Disjoint),
            1 => Ok(Self::Contains),
            2 => Ok(Self::Intersects),
            _ => Err(TagError::UnknownOrdinal {
                tag: "ContainmentType",
                ordinal,
            }),
        }
    }
}

impl From<AngleType> for u8 {
    fn from(tag: AngleType) -> Self {
        tag as u8
    }
}

impl From<Winding> for u8 {
    fn from(tag: Winding) -> Self {
        tag as u8
    }
}

impl From<ContainmentType> for u8 {
    fn from(tag: ContainmentType) -> Self {
        tag as u8
    }
}

impl fmt::Display for AngleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Revolution => "revolution",
            Self::Degree => "degree",
            Self::Radian => "radian",
            Self::Gradian => "gradian",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clockwise => "clockwise",
            Self::CounterClockwise => "counter-clockwise",
            Self::Collinear => "collinear",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ContainmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disjoint => "disjoint",
            Self::Contains => "contains",
            Self::Intersects => "intersects",
        };
        f.write_str(name)
    }
}
