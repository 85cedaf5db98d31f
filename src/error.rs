use thiserror::Error;

/// Top-level error type for the convex2d geometry core.
#[derive(Debug, Error)]
pub enum Convex2dError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

/// Errors raised while building or comparing geometric primitives.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("metric has to be l1, l2 or linf, got `{0}`")]
    InvalidMetric(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised by the GJK proximity algorithms.
#[derive(Debug, Error, PartialEq)]
pub enum AlgorithmError {
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("GJK did not converge within {iterations} iterations")]
    NumericalNonconvergence { iterations: usize },
}

/// Convenience type alias for results using [`Convex2dError`].
pub type Result<T> = std::result::Result<T, Convex2dError>;
