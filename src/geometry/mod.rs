mod line;
mod plane;
mod point;
mod polygon;

pub use line::Line;
pub use plane::Plane;
pub use point::{cross_product, dot_product, Point};
pub use polygon::{Aabb, Polygon};
