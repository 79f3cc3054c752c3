use super::EPSILON;
use crate::geometry::Point;

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += f64::from(points[i].x) * f64::from(points[j].y)
            - f64::from(points[j].x) * f64::from(points[i].y);
    }
    sum * 0.5
}

/// Z component of `(b - a) × (c - b)`: positive for a left turn at `b`.
#[must_use]
pub fn turn_cross(a: Point, b: Point, c: Point) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (cx, cy) = (f64::from(c.x), f64::from(c.y));
    (bx - ax) * (cy - by) - (by - ay) * (cx - bx)
}

/// Index of the lowest vertex, ties broken by smallest x.
fn pivot_index(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.y < b.y || (pt.y == b.y && pt.x < b.x) {
            best = i;
        }
    }
    best
}

/// Convex hull of a point set in the XY plane by Graham scan.
///
/// The hull starts at the lowest (then leftmost) point and proceeds
/// counter-clockwise. Collinear boundary points are dropped. Fewer than
/// three points are returned unchanged.
#[must_use]
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        tracing::debug!(count = points.len(), "too few points for a hull");
        return points.to_vec();
    }

    let mut rest = points.to_vec();
    let pivot = rest.swap_remove(pivot_index(points));

    let (px, py) = (f64::from(pivot.x), f64::from(pivot.y));
    let mut keyed: Vec<(f64, f64, Point)> = rest
        .into_iter()
        .map(|pt| {
            let angle = (f64::from(pt.y) - py).atan2(f64::from(pt.x) - px);
            (angle, pivot.distance_to(pt), pt)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    order_angle_ties_by_distance(&mut keyed);

    let mut hull: Vec<Point> = Vec::with_capacity(points.len());
    hull.push(pivot);
    for (_, _, pt) in keyed {
        while hull.len() > 1 {
            let n = hull.len();
            if turn_cross(hull[n - 2], hull[n - 1], pt) <= 0.0 {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(pt);
    }
    hull
}

/// Re-sorts runs of angles equal within [`EPSILON`] by distance alone.
fn order_angle_ties_by_distance(keyed: &mut [(f64, f64, Point)]) {
    let mut start = 0;
    while start < keyed.len() {
        let base = keyed[start].0;
        let mut end = start + 1;
        while end < keyed.len() && (keyed[end].0 - base).abs() < EPSILON {
            end += 1;
        }
        if end - start > 1 {
            keyed[start..end].sort_by(|a, b| a.1.total_cmp(&b.1));
        }
        start = end;
    }
}
