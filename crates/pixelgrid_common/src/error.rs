use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell coordinate outside the declared grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    /// An explicit operation was requested on a target it cannot apply to.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

pub type GridResult<T> = Result<T, GridError>;
