use thiserror::Error;

/// Top-level error type for the geoprim library.
#[derive(Debug, Error)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Precondition violations raised by point, line and plane construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("division by zero scalar")]
    DivisionByZero,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Precondition violations raised by polygon queries.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("polygon has no vertices")]
    Empty,
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
