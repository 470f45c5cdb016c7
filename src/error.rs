use thiserror::Error;

/// Top-level error type for the gmath crate.
#[derive(Debug, Error)]
pub enum GmathError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Errors related to vector arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("division by zero in {axis} component")]
    DivideByZero { axis: char },

    #[error("integer overflow in {axis} component")]
    Overflow { axis: char },
}

/// Errors related to matrix element access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("linear index {index} is out of range for a matrix of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cell ({row}, {column}) is out of range for a {rows}x{columns} matrix")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Errors related to decoding classification tags from ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("ordinal {ordinal} names no {tag} variant")]
    UnknownOrdinal { tag: &'static str, ordinal: u8 },
}

/// Convenience type alias for results using [`GmathError`].
pub type Result<T> = std::result::Result<T, GmathError>;
