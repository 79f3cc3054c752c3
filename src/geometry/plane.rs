use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::EPSILON;

use super::line::Line;
use super::point::{cross_product, dot_product, Point};

/// An infinite plane `n · x + d = 0` with unit normal `n`.
///
/// Stored as the unit normal and one point on the plane; `d` is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Point,
    point: Point,
}

impl Plane {
    /// Creates a plane through `point` with the given normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the normal is shorter than `1e-6`.
    pub fn new(normal: Point, point: Point) -> Result<Self> {
        if normal.magnitude() < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            normal: normal.normalized()?,
            point,
        })
    }

    /// Creates the plane through three points, oriented by `(b - a) × (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear.
    pub fn from_points(a: Point, b: Point, c: Point) -> Result<Self> {
        let normal = cross_product(b - a, c - a);
        if normal.magnitude() < EPSILON {
            return Err(GeometryError::Degenerate(format!(
                "points {a}, {b} and {c} are collinear"
            ))
            .into());
        }
        Ok(Self {
            normal: normal.normalized()?,
            point: a,
        })
    }

    /// Creates the plane `a·x + b·y + c·z + d = 0`.
    ///
    /// The stored point is found by solving for the axis with the largest
    /// absolute coefficient, the other two coordinates set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `(a, b, c)` is near zero.
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Result<Self> {
        let normal = Point::new(a, b, c);
        if normal.magnitude() < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }

        let (ax, bx, cx) = (a.abs(), b.abs(), c.abs());
        let point = if ax >= bx && ax >= cx {
            Point::new(-d / a, 0.0, 0.0)
        } else if bx >= cx {
            Point::new(0.0, -d / b, 0.0)
        } else {
            Point::new(0.0, 0.0, -d / c)
        };

        Ok(Self {
            normal: normal.normalized()?,
            point,
        })
    }

    /// Unit normal.
    #[must_use]
    pub fn normal(&self) -> Point {
        self.normal
    }

    /// The stored point on the plane.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Constant term of the plane equation, `-n · p`.
    #[must_use]
    pub fn d(&self) -> f64 {
        -dot_product(self.normal, self.point)
    }

    /// Signed distance; positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance_to(&self, point: Point) -> f64 {
        dot_product(self.normal, point) + self.d()
    }

    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        self.signed_distance_to(point).abs()
    }

    /// Whether `point` lies within `epsilon` of the plane.
    #[must_use]
    pub fn contains(&self, point: Point, epsilon: f64) -> bool {
        self.distance_to(point) < epsilon
    }

    /// Whether the line crosses the plane.
    ///
    /// Any line not parallel to the plane crosses it; a parallel line counts
    /// only when it lies in the plane. A zero-length line is treated as its
    /// start point.
    #[must_use]
    pub fn intersects(&self, line: &Line) -> bool {
        match line.direction() {
            Ok(dir) if dot_product(self.normal, dir).abs() >= EPSILON => true,
            _ => self.contains(line.start, EPSILON),
        }
    }

    /// The single point where the infinite line through `line` meets the plane.
    ///
    /// Returns `None` for a line parallel to the plane, including one lying
    /// in it, and for a zero-length line.
    #[must_use]
    pub fn intersection_with(&self, line: &Line) -> Option<Point> {
        let dir = line.direction().ok()?;
        let denom = dot_product(self.normal, dir);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -self.signed_distance_to(line.start) / denom;
        Some(line.start + dir * t)
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: Point) -> Point {
        point - self.normal * self.signed_distance_to(point)
    }

    /// Mirror image of `point` across the plane.
    #[must_use]
    pub fn reflect(&self, point: Point) -> Point {
        point - self.normal * (2.0 * self.signed_distance_to(point))
    }

    /// Acute angle between the normals, in `[0, π/2]`.
    #[must_use]
    pub fn angle_with(&self, other: &Plane) -> f64 {
        dot_product(self.normal, other.normal)
            .abs()
            .clamp(0.0, 1.0)
            .acos()
    }

    /// Whether the normals are parallel (or anti-parallel) within `epsilon`.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Plane, epsilon: f64) -> bool {
        cross_product(self.normal, other.normal).magnitude() < epsilon
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Plane[normal=")?;
        fmt::Display::fmt(&self.normal, f)?;
        f.write_str(", point=")?;
        fmt::Display::fmt(&self.point, f)?;
        f.write_str(", d=")?;
        fmt::Display::fmt(&self.d(), f)?;
        f.write_str("]")
    }
}
