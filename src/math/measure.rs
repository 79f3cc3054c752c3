use super::EPSILON;
use crate::geometry::{cross_product, dot_product, Line, Plane, Point, Polygon};

/// Whether `point` lies on the segment within `epsilon`.
#[must_use]
pub fn is_point_on_line(point: Point, line: &Line, epsilon: f64) -> bool {
    line.contains(point, epsilon)
}

/// Whether `point` lies on the plane within `epsilon`.
#[must_use]
pub fn is_point_on_plane(point: Point, plane: &Plane, epsilon: f64) -> bool {
    plane.contains(point, epsilon)
}

/// Whether three points lie on one line: `|(b - a) × (c - a)| < epsilon`.
#[must_use]
pub fn are_collinear(a: Point, b: Point, c: Point, epsilon: f64) -> bool {
    Line::are_collinear(a, b, c, epsilon)
}

/// Triple product `((b - a) × (c - a)) · (d - a)`.
fn triple_product(a: Point, b: Point, c: Point, d: Point) -> f64 {
    dot_product(cross_product(b - a, c - a), d - a)
}

/// Whether four points lie in one plane: `|triple product| < epsilon`.
#[must_use]
pub fn are_coplanar(a: Point, b: Point, c: Point, d: Point, epsilon: f64) -> bool {
    triple_product(a, b, c, d).abs() < epsilon
}

#[must_use]
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    cross_product(b - a, c - a).magnitude() * 0.5
}

#[must_use]
pub fn tetrahedron_volume(a: Point, b: Point, c: Point, d: Point) -> f64 {
    triple_product(a, b, c, d).abs() / 6.0
}

/// Angle between two vectors in `[0, π]`.
///
/// Returns `0` if either vector is shorter than [`EPSILON`].
#[must_use]
pub fn angle_between(u: Point, v: Point) -> f64 {
    let (mu, mv) = (u.magnitude(), v.magnitude());
    if mu < EPSILON || mv < EPSILON {
        return 0.0;
    }
    (dot_product(u, v) / (mu * mv)).clamp(-1.0, 1.0).acos()
}

/// Convex hull of a loose point set. See [`Polygon::convex_hull`].
#[must_use]
pub fn convex_hull_2d(points: &[Point]) -> Polygon {
    Polygon::from_vertices(points.to_vec()).convex_hull()
}

#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn p(x: f32, y: f32, z: f32) -> Point {
        Point::new(x, y, z)
    }

    #[test]
    fn collinear_and_coplanar() {
        let (a, b, c) = (p(1.0, 2.0, 3.0), p(4.0, 5.0, 6.0), p(7.0, 8.0, 9.0));
        assert!(are_collinear(a, b, c, EPSILON));
        assert!(are_coplanar(a, b, c, p(1.0, 0.0, 0.0), EPSILON));
        assert!(!are_coplanar(
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            EPSILON
        ));
    }

    #[test]
    fn point_membership() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0));
        assert!(is_point_on_line(p(2.0, 0.0, 0.0), &line, EPSILON));
        assert!(!is_point_on_line(p(5.0, 0.0, 0.0), &line, EPSILON));

        let plane = Plane::new(p(0.0, 0.0, 1.0), p(0.0, 0.0, 2.0)).unwrap();
        assert!(is_point_on_plane(p(9.0, -3.0, 2.0), &plane, EPSILON));
        assert!(!is_point_on_plane(p(9.0, -3.0, 2.5), &plane, EPSILON));
    }

    #[test]
    fn area_and_volume() {
        let o = p(0.0, 0.0, 0.0);
        let (x, y, z) = (p(2.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(0.0, 0.0, 2.0));
        assert_relative_eq!(triangle_area(o, x, y), 2.0);
        assert_relative_eq!(tetrahedron_volume(o, x, y, z), 8.0 / 6.0);
        // Orientation does not change the volume sign.
        assert_relative_eq!(tetrahedron_volume(o, y, x, z), 8.0 / 6.0);
        assert_eq!(triangle_area(o, x, p(4.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn angles() {
        assert_abs_diff_eq!(angle_between(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)), FRAC_PI_2);
        assert_abs_diff_eq!(angle_between(p(1.0, 0.0, 0.0), p(-3.0, 0.0, 0.0)), PI);
        assert_eq!(angle_between(Point::ZERO, p(1.0, 0.0, 0.0)), 0.0);
        assert_relative_eq!(radians_to_degrees(FRAC_PI_2), 90.0);
        assert_relative_eq!(degrees_to_radians(180.0), PI);
    }

    #[test]
    fn hull_of_loose_points() {
        let pts = [
            p(0.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(1.0, 2.0, 0.0),
        ];
        let hull = convex_hull_2d(&pts);
        assert_eq!(hull.vertices(), &[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, 2.0, 0.0)]);
    }
}
