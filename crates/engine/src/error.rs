use match3_core::BoardError;
use thiserror::Error;

/// Reasons a swap request is rejected. A rejected swap leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("position outside the board")]
    OutOfBounds,
    #[error("positions are not orthogonally adjacent")]
    NotAdjacent,
    #[error("no item to swap")]
    EmptyCell,
    #[error("swap would not create a match")]
    NoMatch,
}

impl SwapError {
    pub fn code(self) -> &'static str {
        match self {
            SwapError::OutOfBounds => "out_of_bounds",
            SwapError::NotAdjacent => "not_adjacent",
            SwapError::EmptyCell => "empty_cell",
            SwapError::NoMatch => "no_match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("illegal swap: {0}")]
    Swap(#[from] SwapError),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Board(err) => err.code(),
            EngineError::Swap(err) => err.code(),
        }
    }
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
