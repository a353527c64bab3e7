//! Game module - a board bound to its type registry and a score

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use rand::Rng;

use crate::board::{Board, SharedTypes};
use crate::error::Result;
use crate::types::{Size, Type, Types};

/// A play session: owns the type registry, the board drawing from it, and the score.
///
/// The score is reset whenever the board is resized, cleared, reset, or retyped.
/// It only grows through [`award`](Self::award).
#[derive(Debug)]
pub struct Game {
    score: u32,
    types: SharedTypes,
    board: Board,
}

impl Game {
    /// Create a game with an empty registry and a board of `size`.
    pub fn new(size: Size) -> Self {
        let types: SharedTypes = Rc::new(RefCell::new(Types::new()));
        let board = Board::new(&types);
        board.resize(size);
        Self {
            score: 0,
            types,
            board,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add `points` to the score.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn types(&self) -> Ref<'_, Types> {
        self.types.borrow()
    }

    pub fn shared_types(&self) -> &SharedTypes {
        &self.types
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Size {
        self.board.size()
    }

    pub fn resize(&mut self, size: Size) {
        self.score = 0;
        self.board.resize(size);
    }

    /// Reset the score and remove every item.
    pub fn clear(&mut self) {
        self.score = 0;
        self.board.clear();
    }

    /// [`clear`](Self::clear), then empty the registry.
    pub fn reset(&mut self) {
        self.clear();
        self.types.borrow_mut().clear();
    }

    /// Replace the registry content with `types`.
    pub fn set_types(&mut self, types: &Types) {
        self.reset();
        self.types.borrow_mut().add_types(types.iter().cloned());
    }

    /// Union `types` into the registry. The score is untouched.
    pub fn add_types<I>(&mut self, types: I)
    where
        I: IntoIterator,
        I::Item: Into<Type>,
    {
        self.types.borrow_mut().add_types(types);
    }

    /// Clear the board and refill every cell with random items.
    pub fn fill_board(&mut self) -> Result<()> {
        self.clear();
        self.board.fill()
    }

    /// [`fill_board`](Self::fill_board) with a caller-supplied generator.
    pub fn fill_board_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.clear();
        self.board.fill_with_rng(rng)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Size::new(0, 0))
    }
}
