//! Plain value types for positions, angles and boxes.
//!
//! These are snapshots: converting to or from the protobuf message copies the
//! values.

use std::ops::{Add, Neg, Sub};

use crate::proto::common::types as common_types;
use crate::units;

/// A point or offset in nanometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2 {
    pub x: i64,
    pub y: i64,
}

impl Vector2 {
    pub const fn from_xy(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn from_xy_mm(x_mm: f64, y_mm: f64) -> Self {
        Self {
            x: units::from_mm(x_mm),
            y: units::from_mm(y_mm),
        }
    }

    pub fn x_mm(&self) -> f64 {
        units::to_mm(self.x)
    }

    pub fn y_mm(&self) -> f64 {
        units::to_mm(self.y)
    }

    pub fn to_proto(self) -> common_types::Vector2 {
        common_types::Vector2 {
            x_nm: self.x,
            y_nm: self.y,
        }
    }
}

impl From<common_types::Vector2> for Vector2 {
    fn from(value: common_types::Vector2) -> Self {
        Self {
            x: value.x_nm,
            y: value.y_nm,
        }
    }
}

impl From<Vector2> for common_types::Vector2 {
    fn from(value: Vector2) -> Self {
        value.to_proto()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_xy(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_xy(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_xy(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    pub degrees: f64,
}

impl Angle {
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn to_proto(self) -> common_types::Angle {
        common_types::Angle {
            value_degrees: self.degrees,
        }
    }
}

impl From<common_types::Angle> for Angle {
    fn from(value: common_types::Angle) -> Self {
        Self::from_degrees(value.value_degrees)
    }
}

/// An axis-aligned box given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Box2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Box2 {
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    pub fn end(&self) -> Vector2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vector2 {
        Vector2::from_xy(
            self.position.x + self.size.x / 2,
            self.position.y + self.size.y / 2,
        )
    }
}

impl From<common_types::Box2> for Box2 {
    fn from(value: common_types::Box2) -> Self {
        Self {
            position: value.position.map(Vector2::from).unwrap_or_default(),
            size: value.size.map(Vector2::from).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Box2, Vector2};
    use crate::proto::common::types as common_types;

    #[test]
    fn vector_arithmetic_is_componentwise() {
        let a = Vector2::from_xy(10, -5);
        let b = Vector2::from_xy(3, 7);
        assert_eq!(a + b, Vector2::from_xy(13, 2));
        assert_eq!(a - b, Vector2::from_xy(7, -12));
        assert_eq!(-a, Vector2::from_xy(-10, 5));
    }

    #[test]
    fn vector_from_mm_uses_nanometers() {
        let v = Vector2::from_xy_mm(1.5, -0.1);
        assert_eq!(v, Vector2::from_xy(1_500_000, -100_000));
        assert_eq!(v.x_mm(), 1.5);
    }

    #[test]
    fn box_from_proto_defaults_missing_corners() {
        let proto = common_types::Box2 {
            position: Some(common_types::Vector2 { x_nm: 2, y_nm: 4 }),
            size: None,
        };
        let bbox = Box2::from(proto);
        assert_eq!(bbox.position, Vector2::from_xy(2, 4));
        assert_eq!(bbox.size, Vector2::default());
        assert_eq!(bbox.end(), bbox.position);
    }
}
