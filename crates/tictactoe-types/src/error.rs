use std::fmt;

/// Result type for tictactoe-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cell value other than "", "X" or "O"
    InvalidCell(String),

    /// A player value other than "X" or "O"
    InvalidPlayer(String),

    /// Row or column outside the 3x3 grid
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCell(value) => write!(f, "Invalid cell value: {:?}", value),
            Error::InvalidPlayer(value) => write!(f, "Invalid player: {:?}", value),
            Error::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the 3x3 board", row, col)
            }
        }
    }
}

impl std::error::Error for Error {}
