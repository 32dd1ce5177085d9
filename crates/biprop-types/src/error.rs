use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Performance model failed: {0}")]
    ModelFailure(String),

    #[error("No valid data: every cell of the sweep is missing")]
    NoValidData,

    #[error("Grid index out of bounds: row={row}, col={col}")]
    GridOutOfBounds { row: usize, col: usize },

    #[error("Axis index out of bounds: {0}")]
    AxisOutOfBounds(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PerfResult<T> = Result<T, PerfError>;
