pub mod distance;
pub mod intersect;
pub mod measure;
pub mod polygon_2d;

/// 3D vector type used for intermediate linear algebra.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2x2 matrix used by the plane-plane solve.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 matrix used by the three-plane solve.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Default tolerance for geometric comparisons against zero.
pub const EPSILON: f64 = 1e-6;

/// Zero class of the orientation test used by segment-segment intersection.
pub const ORIENTATION_EPSILON: f64 = f64::EPSILON * 1e6;
