//! Board errors.
//!
//! Lookups that find nothing (`cell`, `item`, `remove_item_at`) are not errors;
//! they return `None`.

use thiserror::Error;

use crate::types::{Gravity, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// `add_item` on a position that already holds an item.
    #[error("an item is already at position {0}")]
    OccupiedPosition(Position),
    /// `fill` with no categories available.
    #[error("type pool is empty")]
    EmptyTypePool,
    /// `iterate` under a gravity other than `Down`.
    #[error("gravity direction `{0}` is not supported")]
    UnsupportedGravity(Gravity),
}

impl BoardError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::OccupiedPosition(_) => "occupied_position",
            BoardError::EmptyTypePool => "empty_type_pool",
            BoardError::UnsupportedGravity(_) => "unsupported_gravity",
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
