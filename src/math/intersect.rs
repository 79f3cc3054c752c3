use super::{Matrix2, Matrix3, Vector3, EPSILON};
use crate::geometry::{cross_product, Line, Plane, Point};

/// Intersection of the line through `line` with a plane.
///
/// See [`Plane::intersection_with`].
#[must_use]
pub fn line_plane(line: &Line, plane: &Plane) -> Option<Point> {
    plane.intersection_with(line)
}

/// Intersection of two lines, solved in the XY plane.
///
/// Both lines are treated as infinite and `z` is ignored when solving; the
/// returned point lies on `a` at the solved parameter, so it carries `a`'s
/// `z` interpolation. Returns `None` for parallel or zero-length lines.
#[must_use]
pub fn line_line_2d(a: &Line, b: &Line) -> Option<Point> {
    let d1 = a.direction().ok()?.to_vector();
    let d2 = b.direction().ok()?.to_vector();

    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < EPSILON {
        return None;
    }

    let diff = (b.start - a.start).to_vector();
    let t = (diff.x * d2.y - diff.y * d2.x) / cross;
    Some(Point::from(a.start.to_vector() + d1 * t))
}

/// Line where two planes meet, with a unit direction `n1 × n2`.
///
/// The point on the line is found by pinning the coordinate whose direction
/// component is largest to zero and solving the remaining 2x2 system, whose
/// determinant is exactly that component. Pinning the smallest component
/// instead would be singular whenever the line runs parallel to a coordinate
/// plane, so the anchor differs from a smallest-component solve. If the
/// system is still singular the origin is used. Returns `None` for parallel
/// planes.
#[must_use]
pub fn plane_plane(a: &Plane, b: &Plane) -> Option<Line> {
    if a.is_parallel_to(b, EPSILON) {
        return None;
    }

    let direction = cross_product(a.normal(), b.normal()).normalized().ok()?;
    let dir = direction.to_vector().abs();
    let n1 = a.normal().to_vector();
    let n2 = b.normal().to_vector();

    // Indices of the two coordinates kept free; the third is pinned to zero.
    let (i, j) = if dir.x >= dir.y && dir.x >= dir.z {
        (1, 2)
    } else if dir.y >= dir.z {
        (0, 2)
    } else {
        (0, 1)
    };

    let system = Matrix2::new(n1[i], n1[j], n2[i], n2[j]);
    let rhs = nalgebra::Vector2::new(-a.d(), -b.d());
    let det = system.determinant();

    let mut origin = Vector3::zeros();
    if det.abs() < EPSILON {
        tracing::debug!(det, "singular plane-plane system, anchoring line at origin");
    } else {
        origin[i] = (rhs.x * system.m22 - rhs.y * system.m12) / det;
        origin[j] = (system.m11 * rhs.y - system.m21 * rhs.x) / det;
    }

    let origin = Point::from(origin);
    Some(Line::new(origin, origin + direction))
}

/// The single point shared by three planes, by Cramer's rule.
///
/// Returns `None` if any two planes are parallel or the system is singular.
#[must_use]
pub fn three_planes(a: &Plane, b: &Plane, c: &Plane) -> Option<Point> {
    if a.is_parallel_to(b, EPSILON) || a.is_parallel_to(c, EPSILON) || b.is_parallel_to(c, EPSILON)
    {
        tracing::debug!("two of three planes are parallel");
        return None;
    }

    let normals = Matrix3::from_rows(&[
        a.normal().to_vector().transpose(),
        b.normal().to_vector().transpose(),
        c.normal().to_vector().transpose(),
    ]);
    let det = normals.determinant();
    if det.abs() < EPSILON {
        tracing::debug!(det, "three-plane system is singular");
        return None;
    }

    let rhs = Vector3::new(-a.d(), -b.d(), -c.d());
    let mut solution = Vector3::zeros();
    for axis in 0..3 {
        let mut replaced = normals;
        replaced.set_column(axis, &rhs);
        solution[axis] = replaced.determinant() / det;
    }
    Some(Point::from(solution))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f32, y: f32, z: f32) -> Point {
        Point::new(x, y, z)
    }

    fn plane(normal: Point, point: Point) -> Plane {
        Plane::new(normal, point).unwrap()
    }

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_abs_diff_eq!(f64::from(actual.x), f64::from(expected.x), epsilon = 1e-5);
        assert_abs_diff_eq!(f64::from(actual.y), f64::from(expected.y), epsilon = 1e-5);
        assert_abs_diff_eq!(f64::from(actual.z), f64::from(expected.z), epsilon = 1e-5);
    }

    // ── line_plane ──

    #[test]
    fn line_plane_delegates() {
        let xy = Plane::from_points(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)).unwrap();
        let line = Line::new(p(1.0, 1.0, -1.0), p(1.0, 1.0, 3.0));
        assert_point_eq(line_plane(&line, &xy).unwrap(), p(1.0, 1.0, 0.0));
    }

    // ── line_line_2d ──

    #[test]
    fn crossing_lines() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0));
        let b = Line::new(p(0.0, 2.0, 0.0), p(2.0, 0.0, 0.0));
        assert_point_eq(line_line_2d(&a, &b).unwrap(), p(1.0, 1.0, 0.0));
    }

    #[test]
    fn intersection_beyond_segment_ends() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(5.0, 1.0, 0.0), p(5.0, 2.0, 0.0));
        assert_point_eq(line_line_2d(&a, &b).unwrap(), p(5.0, 0.0, 0.0));
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(0.0, 1.0, 0.0), p(3.0, 1.0, 0.0));
        assert!(line_line_2d(&a, &b).is_none());
    }

    #[test]
    fn skew_lines_are_solved_in_projection() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(0.5, -1.0, 7.0), p(0.5, 1.0, 7.0));
        assert_point_eq(line_line_2d(&a, &b).unwrap(), p(0.5, 0.0, 0.0));
    }

    // ── plane_plane ──

    #[test]
    fn xy_and_xz_meet_on_x_axis() {
        let xy = plane(p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0));
        let xz = plane(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0));
        let line = plane_plane(&xy, &xz).unwrap();
        let dir = line.direction().unwrap();
        assert_abs_diff_eq!(f64::from(dir.x).abs(), 1.0, epsilon = 1e-6);
        assert_point_eq(line.start, p(0.0, 0.0, 0.0));
    }

    #[test]
    fn plane_plane_line_lies_on_both_planes() {
        let a = plane(p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = plane(p(0.0, 1.0, 1.0), p(0.0, 2.0, 0.0));
        let line = plane_plane(&a, &b).unwrap();
        for q in [line.start, line.end] {
            assert!(a.contains(q, 1e-5), "{q} not on {a}");
            assert!(b.contains(q, 1e-5), "{q} not on {b}");
        }
        assert_abs_diff_eq!(line.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn axis_parallel_line_is_anchored_on_both_planes() {
        // z = 1 and x = 2 meet along a line parallel to the Y axis.
        let a = plane(p(0.0, 0.0, 1.0), p(0.0, 0.0, 1.0));
        let b = plane(p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        let line = plane_plane(&a, &b).unwrap();
        assert_point_eq(line.start, p(2.0, 0.0, 1.0));
        assert!(a.contains(line.start, 1e-6));
        assert!(b.contains(line.start, 1e-6));
        let dir = line.direction().unwrap();
        assert_abs_diff_eq!(f64::from(dir.y).abs(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn parallel_planes_have_no_line() {
        let a = plane(p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0));
        let b = plane(p(0.0, 0.0, -2.0), p(0.0, 0.0, 3.0));
        assert!(plane_plane(&a, &b).is_none());
    }

    // ── three_planes ──

    #[test]
    fn coordinate_planes_meet_at_origin() {
        let origin = p(0.0, 0.0, 0.0);
        let x = plane(p(1.0, 0.0, 0.0), origin);
        let y = plane(p(0.0, 1.0, 0.0), origin);
        let z = plane(p(0.0, 0.0, 1.0), origin);
        assert_point_eq(three_planes(&x, &y, &z).unwrap(), origin);
    }

    #[test]
    fn offset_planes_meet_at_corner() {
        let x = plane(p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let y = plane(p(0.0, 1.0, 0.0), p(0.0, 2.0, 0.0));
        let z = plane(p(1.0, 1.0, 1.0), p(1.0, 2.0, 3.0));
        assert_point_eq(three_planes(&x, &y, &z).unwrap(), p(1.0, 2.0, 3.0));
    }

    #[test]
    fn parallel_pair_has_no_point() {
        let x0 = plane(p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0));
        let x1 = plane(p(1.0, 0.0, 0.0), p(4.0, 0.0, 0.0));
        let z = plane(p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0));
        assert!(three_planes(&x0, &x1, &z).is_none());
    }

    #[test]
    fn planes_sharing_a_line_have_no_point() {
        // All three contain the Z axis.
        let origin = p(0.0, 0.0, 0.0);
        let a = plane(p(1.0, 0.0, 0.0), origin);
        let b = plane(p(0.0, 1.0, 0.0), origin);
        let c = plane(p(1.0, 1.0, 0.0), origin);
        assert!(three_planes(&a, &b, &c).is_none());
    }
}
