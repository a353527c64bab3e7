//! Core game logic - the match-3 board engine
//!
//! This crate holds the rules of the puzzle: a rectangular grid of cells, typed
//! items placed on it, match detection, removal, and gravity settling. It has
//! no dependency on rendering, input, or I/O.
//!
//! # Module Structure
//!
//! - [`board`]: grid of cells plus the items on it; placement, removal, matching, gravity
//! - [`item`]: movable typed pieces and the row/column match test
//! - [`cell`]: fixed grid slots
//! - [`game`]: session wrapper binding a board to its type registry and a score
//! - [`snapshot`]: dense serializable view of a board
//! - [`error`]: [`BoardError`]
//!
//! # Game Rules
//!
//! - A **match** is a contiguous run of at least 3 compatible items along a row
//!   or a column. Compatibility is the relaxed [`Type`](types::Type) equality,
//!   so the wildcard category joins any run.
//! - **Gravity** moves items down one row per [`Board::iterate`] call. Repeat
//!   until it returns no moved items to fully settle.
//! - [`Board::find_and_remove_matches`] is a single pass; cascades are driven by
//!   the caller (see the `match3-engine` crate).
//!
//! # Observing
//!
//! Items expose `kind`, `position`, and `alive` as [`Property`](signal::Property)
//! values; cells expose their debug `kind`. Notifications are synchronous.
//!
//! # Example
//!
//! ```
//! use match3_core::{Game, Item};
//! use match3_core::types::{Position, Size, Types};
//!
//! let mut game = Game::new(Size::new(3, 3));
//! game.set_types(&["a", "b", "c"].into_iter().collect::<Types>());
//!
//! let board = game.board();
//! for y in 0..3 {
//!     board.add_item(Item::new("a", Position::new(1, y))).unwrap();
//! }
//! assert!(board.has_match());
//!
//! let removed = board.find_and_remove_matches();
//! assert_eq!(removed.len(), 3);
//! assert!(removed.iter().all(|item| !item.is_alive()));
//! assert_eq!(board.item_count(), 0);
//! ```

pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod item;
pub mod snapshot;

pub use match3_signal as signal;
pub use match3_types as types;

pub use board::{Board, SharedTypes, WeakBoard};
pub use cell::{Cell, CellRef};
pub use error::BoardError;
pub use game::Game;
pub use item::{Item, ItemRef};
pub use snapshot::{hash_tiles, BoardSnapshot};
