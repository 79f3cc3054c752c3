use super::EPSILON;
use crate::error::Result;
use crate::geometry::{cross_product, dot_product, Line, Plane, Point};

/// Euclidean distance between two points.
#[must_use]
pub fn point_to_point(a: Point, b: Point) -> f64 {
    a.distance_to(b)
}

/// Distance from a point to a line segment (clamped projection).
#[must_use]
pub fn point_to_line(point: Point, line: &Line) -> f64 {
    line.distance_to(point)
}

/// Unsigned distance from a point to a plane.
#[must_use]
pub fn point_to_plane(point: Point, plane: &Plane) -> f64 {
    plane.distance_to(point)
}

/// Shortest distance between two lines.
///
/// Non-parallel lines use the infinite-line triple-product formula
/// `|(s2 - s1) · (d1 × d2)| / |d1 × d2|`. Parallel lines fall back to the
/// segment distance from `b.start` to `a`.
///
/// # Errors
///
/// Returns an error if either line has zero length.
pub fn line_to_line(a: &Line, b: &Line) -> Result<f64> {
    let cross = cross_product(a.direction()?, b.direction()?);
    let cross_len = cross.magnitude();
    if cross_len < EPSILON {
        return Ok(a.distance_to(b.start));
    }
    Ok(dot_product(b.start - a.start, cross).abs() / cross_len)
}
