use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate data: {0}")]
    DegenerateData(String),

    #[error("stack {stack_index} produced {actual} vertices, expected {expected}")]
    IncompleteStack {
        stack_index: usize,
        expected: usize,
        actual: usize,
    },
}
