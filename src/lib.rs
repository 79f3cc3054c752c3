//! Geometric primitives (points, lines, planes, polygons) and the
//! tolerance-based algorithms over them: distances, intersections,
//! containment and convex hulls.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, GeoprimError, PolygonError, Result};
pub use geometry::{cross_product, dot_product, Aabb, Line, Plane, Point, Polygon};
pub use math::{EPSILON, ORIENTATION_EPSILON};
