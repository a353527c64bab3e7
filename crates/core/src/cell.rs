//! Cell module - a fixed slot of the board grid

use std::fmt;
use std::rc::Rc;

use crate::board::{Board, WeakBoard};
use crate::signal::Property;
use crate::types::{Position, Type};

pub type CellRef = Rc<Cell>;

/// A grid slot. Cells are created in bulk by [`Board::resize`] and never move.
///
/// The observable `kind` is informational only (debug typing); gameplay never
/// reads it.
#[derive(Debug)]
pub struct Cell {
    kind: Property<Type>,
    position: Position,
    board: WeakBoard,
}

impl Cell {
    pub(crate) fn new(position: Position, board: WeakBoard) -> CellRef {
        Rc::new(Self {
            kind: Property::new(Type::NONE),
            position,
            board,
        })
    }

    pub fn kind(&self) -> &Property<Type> {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Owning board, if it is still alive.
    pub fn board(&self) -> Option<Board> {
        self.board.upgrade()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{type: {}, position: {}}}",
            self.kind.get(),
            self.position
        )
    }
}
