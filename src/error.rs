use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("side length must be positive")]
    InvalidSide,

    #[error("side length {0} overflows the cell count")]
    SideTooLarge(usize),

    #[error("cell {index} does not exist in a world of {len} cells")]
    UnknownCell { index: usize, len: usize },

    #[error("{len} cells do not form a square world")]
    MalformedWorld { len: usize },

    #[error("fill rate {0} is outside [0, 1]")]
    InvalidFillRate(f64),
}
