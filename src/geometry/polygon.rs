use std::fmt;

use crate::error::{PolygonError, Result};
use crate::math::polygon_2d::{graham_scan, signed_area_2d, turn_cross};
use crate::math::EPSILON;

use super::line::Line;
use super::point::Point;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

/// An ordered vertex loop.
///
/// Insertion order is winding order and the edge from the last vertex back
/// to the first is implicit. Vertices can be appended but never removed.
/// Area, containment and hull work on the XY projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from vertices in winding order.
    #[must_use]
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Appends a vertex at the end of the loop.
    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Enclosed area in the XY plane; `0` below three vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }

    /// Length of the closed boundary; `0` below two vertices.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.edges().iter().map(Line::length).sum()
    }

    /// Area-weighted centroid.
    ///
    /// One vertex is its own centroid and two give their midpoint. When the
    /// signed area is near zero the plain vertex mean is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::Empty`] for a polygon without vertices.
    pub fn centroid(&self) -> Result<Point> {
        match self.vertices.as_slice() {
            [] => Err(PolygonError::Empty.into()),
            [only] => Ok(*only),
            [a, b] => Ok(Line::new(*a, *b).midpoint()),
            vertices => Ok(area_weighted_centroid(vertices)),
        }
    }

    /// Whether every turn of the loop bends the same way.
    ///
    /// Straight (collinear) turns are ignored. Fewer than three vertices, or
    /// a loop with no bending turn at all, is not convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut winding: Option<bool> = None;
        for i in 0..n {
            let cross = turn_cross(
                self.vertices[i],
                self.vertices[(i + 1) % n],
                self.vertices[(i + 2) % n],
            );
            if cross.abs() < EPSILON {
                continue;
            }
            let left = cross > 0.0;
            match winding {
                None => winding = Some(left),
                Some(w) if w != left => return false,
                Some(_) => {}
            }
        }
        winding.is_some()
    }

    /// Point-in-polygon by ray casting on the XY projection.
    ///
    /// With `include_boundary`, a point on any edge counts as inside.
    #[must_use]
    pub fn contains_point(&self, point: Point, include_boundary: bool) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let (px, py) = (f64::from(point.x), f64::from(point.y));
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if include_boundary && Line::new(vi, vj).contains(point, EPSILON) {
                return true;
            }

            let (xi, yi) = (f64::from(vi.x), f64::from(vi.y));
            let (xj, yj) = (f64::from(vj.x), f64::from(vj.y));
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Convex hull by Graham scan, counter-clockwise from the lowest vertex.
    ///
    /// Below three vertices the polygon is returned unchanged.
    #[must_use]
    pub fn convex_hull(&self) -> Polygon {
        Polygon::from_vertices(graham_scan(&self.vertices))
    }

    /// Distance from `point` to the polygon; `0` inside or on the boundary.
    ///
    /// Every cyclic edge counts, so a single vertex is a zero-length edge.
    /// An empty polygon is infinitely far away.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        if self.contains_point(point, true) {
            return 0.0;
        }
        let n = self.vertices.len();
        (0..n)
            .map(|i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]).distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether the polygons overlap: crossing edges, or a vertex of one
    /// inside the other. Quadratic in the vertex counts.
    #[must_use]
    pub fn intersects(&self, other: &Polygon) -> bool {
        let other_edges = other.edges();
        let edges_cross = self
            .edges()
            .iter()
            .any(|a| other_edges.iter().any(|b| a.intersects(b)));

        edges_cross
            || self.vertices.iter().any(|v| other.contains_point(*v, true))
            || other.vertices.iter().any(|v| self.contains_point(*v, true))
    }

    /// Component-wise bounds of the vertices; a zero box at the origin when empty.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let Some(first) = self.vertices.first() else {
            return Aabb {
                min: Point::ZERO,
                max: Point::ZERO,
            };
        };

        self.vertices.iter().skip(1).fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |bb, v| Aabb {
                min: Point::new(bb.min.x.min(v.x), bb.min.y.min(v.y), bb.min.z.min(v.z)),
                max: Point::new(bb.max.x.max(v.x), bb.max.y.max(v.y), bb.max.z.max(v.z)),
            },
        )
    }

    /// Drops interior vertices collinear (within `epsilon`) with their
    /// immediate neighbours. First and last vertices are always kept.
    #[must_use]
    pub fn simplify(&self, epsilon: f64) -> Polygon {
        let n = self.vertices.len();
        if n < 3 {
            return self.clone();
        }

        let mut kept = Vec::with_capacity(n);
        kept.push(self.vertices[0]);
        kept.extend(
            self.vertices
                .windows(3)
                .filter(|w| !Line::are_collinear(w[0], w[1], w[2], epsilon))
                .map(|w| w[1]),
        );
        kept.push(self.vertices[n - 1]);
        Polygon::from_vertices(kept)
    }

    /// Boundary segments in order, closing edge last. Empty below two vertices.
    #[must_use]
    pub fn edges(&self) -> Vec<Line> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }
}

fn area_weighted_centroid(vertices: &[Point]) -> Point {
    let n = vertices.len();
    let mut area_sum = 0.0;
    let (mut cx, mut cy) = (0.0_f64, 0.0_f64);
    for i in 0..n {
        let cur = vertices[i];
        let next = vertices[(i + 1) % n];
        let (x0, y0) = (f64::from(cur.x), f64::from(cur.y));
        let (x1, y1) = (f64::from(next.x), f64::from(next.y));

        let a = (x0 * y1 - x1 * y0) * 0.5;
        area_sum += a;
        cx += (x0 + x1) * a / 3.0;
        cy += (y0 + y1) * a / 3.0;
    }

    if area_sum.abs() < EPSILON {
        tracing::debug!(area = area_sum, "near-zero polygon area, using vertex mean");
        let sum = vertices.iter().fold(Point::ZERO.to_vector(), |acc, v| acc + v.to_vector());
        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;
        return Point::from(sum / count);
    }

    Point::from(crate::math::Vector3::new(cx / area_sum, cy / area_sum, 0.0))
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

impl Extend<Point> for Polygon {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str("]")
    }
}
