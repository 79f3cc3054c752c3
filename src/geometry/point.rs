use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::{GeometryError, Result};
use crate::math::Vector3;

/// A point (or free vector) in 3D space.
///
/// Coordinates are stored as `f32`. Metric quantities are evaluated in `f64`,
/// and scalar multiplication narrows its result back to `f32` storage.
/// Equality is exact component comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    /// The origin / zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Widens the coordinates into an `f64` vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3 {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Euclidean norm, accumulated with `hypot` so large coordinates do not overflow.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        f64::from(self.x)
            .hypot(f64::from(self.y))
            .hypot(f64::from(self.z))
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.to_vector().norm_squared()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the magnitude is zero.
    pub fn normalized(self) -> Result<Self> {
        let len = self.magnitude();
        if len == 0.0 {
            return Err(GeometryError::ZeroVector.into());
        }
        self.try_div(len)
    }

    /// Divides every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `scalar` is zero.
    pub fn try_div(self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(GeometryError::DivisionByZero.into());
        }
        Ok(Self::from(self.to_vector() / scalar))
    }
}

impl From<Vector3> for Point {
    #[allow(clippy::cast_possible_truncation)]
    fn from(v: Vector3) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl From<Point> for Vector3 {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

/// Dot product of two vectors.
#[must_use]
pub fn dot_product(a: Point, b: Point) -> f64 {
    a.to_vector().dot(&b.to_vector())
}

/// Cross product `a × b`.
#[must_use]
pub fn cross_product(a: Point, b: Point) -> Point {
    Point::from(a.to_vector().cross(&b.to_vector()))
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::from(self.to_vector() * scalar)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(
                f,
                "({:.prec$}, {:.prec$}, {:.prec$})",
                self.x, self.y, self.z
            ),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
