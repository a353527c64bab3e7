//! Item module - movable typed game pieces and the match test
//!
//! A match is a contiguous run of compatible types along a row or a column,
//! passing through the tested item, at least [`MIN_MATCH_LENGTH`] long.
//! The two axes are scanned independently; diagonals and L/T shapes are not
//! considered.

use std::fmt;
use std::rc::Rc;

use crate::board::{Board, WeakBoard};
use crate::signal::Property;
use crate::types::{Position, Size, Type, MIN_MATCH_LENGTH};

pub type ItemRef = Rc<Item>;

/// A game piece. Belongs to at most one board at a time.
///
/// All state is observable: `kind`, `position`, `alive`, and the board
/// back-reference. `alive` turns false the moment the item leaves a board.
#[derive(Debug)]
pub struct Item {
    kind: Property<Type>,
    position: Property<Position>,
    alive: Property<bool>,
    board: Property<WeakBoard>,
}

impl Item {
    /// Create a detached item.
    pub fn new(kind: impl Into<Type>, position: Position) -> ItemRef {
        Self::attached(kind.into(), position, WeakBoard::default())
    }

    pub(crate) fn attached(kind: Type, position: Position, board: WeakBoard) -> ItemRef {
        Rc::new(Self {
            kind: Property::new(kind),
            position: Property::new(position),
            alive: Property::new(true),
            board: Property::new(board),
        })
    }

    pub fn kind(&self) -> &Property<Type> {
        &self.kind
    }

    pub fn position(&self) -> &Property<Position> {
        &self.position
    }

    pub fn alive(&self) -> &Property<bool> {
        &self.alive
    }

    /// The observable back-reference. Prefer [`board`](Self::board) for access.
    pub fn board_ref(&self) -> &Property<WeakBoard> {
        &self.board
    }

    /// Owning board, if attached and still alive.
    pub fn board(&self) -> Option<Board> {
        self.board.with(WeakBoard::upgrade)
    }

    pub fn is_attached(&self) -> bool {
        self.board().is_some()
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// True if this item is part of a run of at least three along its row or column.
    ///
    /// A detached item never matches.
    pub fn has_match(&self) -> bool {
        let Some(board) = self.board() else {
            return false;
        };
        let kind = self.kind.get();
        let lookup = |p: Position| board.item(p).map(|it| it.kind.get());
        matches_through(self.position.get(), &kind, board.size(), &lookup)
    }

    /// Point at `board` and mark the item alive again if it was removed before.
    pub(crate) fn attach(&self, board: WeakBoard) {
        self.board.set(board);
        self.alive.set_if_changed(true);
    }

    pub(crate) fn detach(&self) {
        self.alive.set(false);
        self.board.set(WeakBoard::default());
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{type: {}, position: {}, status: {}}}",
            self.kind.get(),
            self.position.get(),
            self.alive.get()
        )
    }
}

/// Match test through `origin`, treating it as holding `kind`.
///
/// `lookup` returns the type of the item at a position, or `None` when empty.
pub(crate) fn matches_through<F>(origin: Position, kind: &Type, size: Size, lookup: &F) -> bool
where
    F: Fn(Position) -> Option<Type>,
{
    run_length(origin, Position::new(1, 0), kind, size, lookup) >= MIN_MATCH_LENGTH
        || run_length(origin, Position::new(0, 1), kind, size, lookup) >= MIN_MATCH_LENGTH
}

/// Length of the compatible run through `origin` along `axis`, counting `origin` itself.
fn run_length<F>(origin: Position, axis: Position, kind: &Type, size: Size, lookup: &F) -> usize
where
    F: Fn(Position) -> Option<Type>,
{
    let mut length = 1;
    for sign in [-1, 1] {
        let step = Position::new(axis.x() * sign, axis.y() * sign);
        let mut p = origin + step;
        while size.contains(p) {
            match lookup(p) {
                Some(other) if other == *kind => length += 1,
                _ => break,
            }
            p += step;
        }
    }
    length
}
