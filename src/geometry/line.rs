use std::fmt;

use crate::error::Result;
use crate::math::{EPSILON, ORIENTATION_EPSILON};

use super::point::{cross_product, dot_product, Point};

/// A line through two points.
///
/// The same value serves two readings. Bounded queries (`contains`,
/// `distance_to`, `project`, `reflect`, polygon edges) treat it as the
/// segment `start..=end`. Direction queries (`direction`, `angle_with`)
/// treat it as the infinite line through both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// Turn direction of an ordered point triple in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let ab_x = f64::from(b.x) - f64::from(a.x);
    let ab_y = f64::from(b.y) - f64::from(a.y);
    let ac_x = f64::from(c.x) - f64::from(a.x);
    let ac_y = f64::from(c.y) - f64::from(a.y);
    let cross = ab_x * ac_y - ab_y * ac_x;
    if cross > ORIENTATION_EPSILON {
        Orientation::CounterClockwise
    } else if cross < -ORIENTATION_EPSILON {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Whether `q` falls inside the XY bounding rectangle of segment `a..b`.
fn within_xy_bounds(a: Point, b: Point, q: Point) -> bool {
    let eps = ORIENTATION_EPSILON;
    let (qx, qy) = (f64::from(q.x), f64::from(q.y));
    qx >= f64::from(a.x.min(b.x)) - eps
        && qx <= f64::from(a.x.max(b.x)) + eps
        && qy >= f64::from(a.y.min(b.y)) - eps
        && qy <= f64::from(a.y.max(b.y)) + eps
}

impl Line {
    /// Creates a line from two endpoints.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The raw vector `end - start`.
    #[must_use]
    pub fn vector(&self) -> Point {
        self.end - self.start
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Unit vector from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`](crate::error::GeometryError::ZeroVector)
    /// if the endpoints coincide.
    pub fn direction(&self) -> Result<Point> {
        self.vector().normalized()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    /// Segment-segment crossing test in the XY plane.
    ///
    /// `z` is ignored. Touching endpoints and collinear overlap both count
    /// as intersecting.
    #[must_use]
    pub fn intersects(&self, other: &Line) -> bool {
        let (p1, q1) = (self.start, self.end);
        let (p2, q2) = (other.start, other.end);

        let o1 = orientation(p1, q1, p2);
        let o2 = orientation(p1, q1, q2);
        let o3 = orientation(p2, q2, p1);
        let o4 = orientation(p2, q2, q1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && within_xy_bounds(p1, q1, p2))
            || (o2 == Orientation::Collinear && within_xy_bounds(p1, q1, q2))
            || (o3 == Orientation::Collinear && within_xy_bounds(p2, q2, p1))
            || (o4 == Orientation::Collinear && within_xy_bounds(p2, q2, q1))
    }

    /// Whether `point` lies on the segment, within `epsilon`, in full 3D.
    #[must_use]
    pub fn contains(&self, point: Point, epsilon: f64) -> bool {
        let cross = cross_product(self.vector(), point - self.start);
        if cross.magnitude() >= epsilon {
            return false;
        }

        let within = |v: f32, a: f32, b: f32| {
            let v = f64::from(v);
            v >= f64::from(a.min(b)) - epsilon && v <= f64::from(a.max(b)) + epsilon
        };
        within(point.x, self.start.x, self.end.x)
            && within(point.y, self.start.y, self.end.y)
            && within(point.z, self.start.z, self.end.z)
    }

    /// Segment parameter of the foot of `point`, clamped to `[0, 1]`.
    ///
    /// A zero-length segment always yields `0`.
    fn clamped_parameter(&self, point: Point) -> f64 {
        let d = self.vector();
        let len_sq = d.magnitude_squared();
        if len_sq < EPSILON * EPSILON {
            return 0.0;
        }
        (dot_product(point - self.start, d) / len_sq).clamp(0.0, 1.0)
    }

    /// Closest point of the segment to `point`.
    #[must_use]
    pub fn project(&self, point: Point) -> Point {
        let t = self.clamped_parameter(point);
        self.start + self.vector() * t
    }

    /// Distance from `point` to the segment.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        point.distance_to(self.project(point))
    }

    /// Mirror image of `point` through its clamped projection.
    ///
    /// When the perpendicular foot falls outside the segment the mirror is
    /// taken through the nearer endpoint.
    #[must_use]
    pub fn reflect(&self, point: Point) -> Point {
        self.project(point) * 2.0 - point
    }

    /// Acute angle between the two lines' directions, in `[0, π/2]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either line has zero length.
    pub fn angle_with(&self, other: &Line) -> Result<f64> {
        let cos = dot_product(self.direction()?, other.direction()?).abs();
        Ok(cos.clamp(0.0, 1.0).acos())
    }

    /// Whether `a`, `b` and `c` lie on one line within `epsilon`.
    #[must_use]
    pub fn are_collinear(a: Point, b: Point, c: Point, epsilon: f64) -> bool {
        cross_product(b - a, c - a).magnitude() < epsilon
    }

    /// Linear interpolation `p0 + (p1 - p0) * t`; `t` is not clamped.
    #[must_use]
    pub fn lerp(p0: Point, p1: Point, t: f64) -> Point {
        p0 + (p1 - p0) * t
    }

    /// Quadratic Bézier point by de Casteljau's construction.
    #[must_use]
    pub fn bezier_quadratic(p0: Point, control: Point, p1: Point, t: f64) -> Point {
        let a = Self::lerp(p0, control, t);
        let b = Self::lerp(control, p1, t);
        Self::lerp(a, b, t)
    }

    /// Cubic Bézier point by de Casteljau's construction.
    #[must_use]
    pub fn bezier_cubic(p0: Point, c0: Point, c1: Point, p1: Point, t: f64) -> Point {
        let a = Self::bezier_quadratic(p0, c0, c1, t);
        let b = Self::bezier_quadratic(c0, c1, p1, t);
        Self::lerp(a, b, t)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Line[")?;
        fmt::Display::fmt(&self.start, f)?;
        f.write_str(" -> ")?;
        fmt::Display::fmt(&self.end, f)?;
        f.write_str("]")
    }
}
