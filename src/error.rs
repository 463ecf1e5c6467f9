use thiserror::Error;

/// Top-level error type for the Boundline geometry engine.
#[derive(Debug, Error)]
pub enum BoundlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("unknown domain type: {0}")]
    UnknownDomainType(String),
}

/// Errors raised while interpreting a path string.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path syntax error at `{token}`: {reason}")]
    Syntax { token: String, reason: String },

    #[error("path `{0}` produced no segments")]
    Empty(String),

    #[error("connecting boundary `{0}` not found")]
    UnresolvedConnector(String),

    #[error("unknown boundary connector type `{0}`")]
    UnknownConnector(String),
}

/// Errors related to the boundary registry.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("boundary not found: {0}")]
    NotFound(String),

    #[error("boundary `{0}` is already registered")]
    DuplicateName(String),
}

/// Errors related to geometric operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("rejection sampling gave up after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
}

/// Convenience type alias for results using [`BoundlineError`].
pub type Result<T> = std::result::Result<T, BoundlineError>;
