use thiserror::Error;

/// Top-level error type for poly-curve resolution.
#[derive(Debug, Error)]
pub enum PolycurveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("points are collinear")]
    Collinear,

    #[error("points are coincident")]
    Coincident,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Structural errors that abort the resolution of a whole curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("IfcIndexedPolyCurve index out of bounds for index {index} (point count {max})")]
    IndexOutOfBounds { index: i64, max: usize },

    #[error("invalid IfcArcIndex encountered: expected 3 indices, found {count}")]
    InvalidArcIndex { count: usize },

    #[error("unexpected IfcIndexedPolyCurve segment of type {kind}")]
    UnexpectedSegment { kind: String },

    #[error("length unit must be a positive finite number, got {0}")]
    InvalidLengthUnit(f64),
}

/// Convenience type alias for results using [`PolycurveError`].
pub type Result<T> = std::result::Result<T, PolycurveError>;
