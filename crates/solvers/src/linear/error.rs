use thiserror::Error;

/// Errors that can occur while building or solving a linear system.
///
/// Iterative solvers that run out of sweeps do not error; they report
/// [`Status::MaxIters`](solvekit_core::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("system has no unknowns")]
    Empty,

    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("singular matrix: no usable pivot in column {column}")]
    Singular { column: usize },

    #[error("zero pivot in row {row}")]
    ZeroPivot { row: usize },
}
