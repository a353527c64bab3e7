//! Swap module - player moves
//!
//! A swap exchanges the items on two orthogonally adjacent cells. It is only
//! legal when it creates a match through one of the two moved items.

use match3_core::{Board, Game};
use match3_types::Position;
use tracing::debug;

use crate::cascade::{resolve_cascade, CascadeReport};
use crate::error::{Result, SwapError};

/// Validate and perform the swap of the items at `a` and `b`.
///
/// Every check runs before anything moves, so a rejected swap leaves the
/// board exactly as it was.
pub fn try_swap(board: &Board, a: Position, b: Position) -> std::result::Result<(), SwapError> {
    if !board.contains(a) || !board.contains(b) {
        return Err(SwapError::OutOfBounds);
    }
    if !a.is_adjacent(b) {
        return Err(SwapError::NotAdjacent);
    }
    let (Some(item_a), Some(item_b)) = (board.item(a), board.item(b)) else {
        return Err(SwapError::EmptyCell);
    };
    if !board.would_match_after_swap(a, b) {
        return Err(SwapError::NoMatch);
    }

    // Move both before notifying so observers never see a shared cell.
    item_a.position().set_silent(b);
    item_b.position().set_silent(a);
    item_a.position().signal().emit(&b);
    item_b.position().signal().emit(&a);
    debug!(%a, %b, "items swapped");
    Ok(())
}

/// First legal swap found, scanning rows bottom to top and each row left to
/// right. Only the right and upper neighbour of each cell are tried, which
/// covers every adjacent pair once.
pub fn find_hint(board: &Board) -> Option<(Position, Position)> {
    let size = board.size();
    for y in 0..size.height() {
        for x in 0..size.width() {
            let here = Position::new(x as i32, y as i32);
            for there in [here.offset(1, 0), here.offset(0, 1)] {
                if board.contains(there) && board.would_match_after_swap(here, there) {
                    return Some((here, there));
                }
            }
        }
    }
    None
}

pub fn has_moves(board: &Board) -> bool {
    find_hint(board).is_some()
}

/// Swap, then resolve the resulting cascade into `game`'s score.
pub fn play_swap(
    game: &mut Game,
    a: Position,
    b: Position,
    max_rounds: usize,
) -> Result<CascadeReport> {
    try_swap(game.board(), a, b)?;
    resolve_cascade(game, max_rounds)
}
