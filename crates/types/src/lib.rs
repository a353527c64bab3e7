//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental value types used by the match-3 engine.
//! Everything here is plain data with no external dependencies, so it can be
//! used by the board engine, the cascade layer, and any presentation layer alike.
//!
//! # Coordinates
//!
//! - [`Position`]: `(x, y)` with `x` the column and `y` the row
//! - Origin `(0, 0)` is the **bottom left** of the board
//! - [`Size`]: `(width, height)` with unsigned components
//!
//! # Tile categories
//!
//! A [`Type`] is an opaque name. Two names are reserved:
//!
//! | Constant | Name | Meaning |
//! |----------|------|---------|
//! | `Type::NONE` | `""` | Empty / absent |
//! | `Type::ANY` | `"*"` | Wildcard, matches any non-empty category |
//!
//! # Scoring constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_MATCH_LENGTH` | 3 | Shortest run that counts as a match |
//! | `POINTS_PER_ITEM` | 10 | Points for each removed item |
//! | `COMBO_BASE` | 50 | Bonus per cascade round after the first |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Gravity, Position, Size, Type, Types};
//!
//! let size = Size::new(8, 6);
//! assert!(size.contains(Position::new(7, 5)));
//!
//! let mut types = Types::new();
//! types.add_types(["red", "green", "red"]);
//! assert_eq!(types.len(), 2);
//!
//! assert!(Type::new("red") == Type::ANY);
//! assert!(Type::ANY != Type::NONE);
//!
//! assert_eq!(Gravity::default(), Gravity::Down);
//! ```

pub mod matrix;
pub mod tile;
pub mod vector;

pub use matrix::Matrix;
pub use tile::{Gravity, Type, Types};
pub use vector::{Position, Size, Vector2};

/// Shortest contiguous run (through an item, along a row or a column) that counts as a match.
pub const MIN_MATCH_LENGTH: usize = 3;

/// Points for each item removed by a match.
pub const POINTS_PER_ITEM: u32 = 10;

/// Combo bonus base, multiplied by the cascade round index (0-based).
pub const COMBO_BASE: u32 = 50;
