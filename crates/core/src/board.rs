//! Board module - owns the cell grid and the pieces on it
//!
//! The board keeps two flat collections: one [`Cell`] per grid slot and the
//! [`Item`]s currently placed. Items are looked up by position with a linear
//! scan, which is plenty for puzzle-sized boards.
//!
//! Coordinates: `(x, y)` with `x` in `0..width` (left to right) and `y` in
//! `0..height` (bottom to top). Origin is the bottom left.
//!
//! [`Board`] is a shared handle. Cells and items keep a [`WeakBoard`] back to
//! it, so they never keep the board alive. Every mutating call drops its
//! internal borrow before notifying observers, which lets an observer query
//! the board from inside a notification.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::{debug, trace};

use crate::cell::{Cell, CellRef};
use crate::error::{BoardError, Result};
use crate::item::{matches_through, Item, ItemRef};
use crate::snapshot::BoardSnapshot;
use crate::types::{Gravity, Position, Size, Type, Types};

/// Type registry shared between a game and its board.
pub type SharedTypes = Rc<RefCell<Types>>;

#[derive(Default)]
struct BoardState {
    size: Size,
    gravity: Gravity,
    cells: Vec<CellRef>,
    items: Vec<ItemRef>,
}

struct BoardInner {
    types: Weak<RefCell<Types>>,
    state: RefCell<BoardState>,
}

/// Shared handle to a match-3 board.
///
/// Cloning the handle does not copy the board. Two handles are equal when
/// they point to the same board.
#[derive(Clone)]
pub struct Board {
    inner: Rc<BoardInner>,
}

/// Non-owning reference to a [`Board`].
#[derive(Clone, Default)]
pub struct WeakBoard {
    inner: Weak<BoardInner>,
}

impl WeakBoard {
    pub fn upgrade(&self) -> Option<Board> {
        self.inner.upgrade().map(|inner| Board { inner })
    }

    /// True if this refers to `board`.
    pub fn points_to(&self, board: &Board) -> bool {
        std::ptr::eq(self.inner.as_ptr(), Rc::as_ptr(&board.inner))
    }
}

impl fmt::Debug for WeakBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakBoard")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl Board {
    /// Create an empty 0x0 board drawing its fill types from `types`.
    ///
    /// Only a weak reference to the registry is kept.
    pub fn new(types: &SharedTypes) -> Self {
        Self {
            inner: Rc::new(BoardInner {
                types: Rc::downgrade(types),
                state: RefCell::new(BoardState::default()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakBoard {
        WeakBoard {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn ptr_eq(&self, other: &Board) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn state(&self) -> Ref<'_, BoardState> {
        self.inner.state.borrow()
    }

    fn state_mut(&self) -> RefMut<'_, BoardState> {
        self.inner.state.borrow_mut()
    }

    /// Current grid dimensions.
    pub fn size(&self) -> Size {
        self.state().size
    }

    /// Check whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        self.size().contains(pos)
    }

    /// Discard all cells and items, then create one cell per slot of `size`.
    pub fn resize(&self, size: Size) {
        self.clear_items();

        let weak = self.downgrade();
        let mut cells = Vec::with_capacity(size.area());
        for x in 0..size.width() {
            for y in 0..size.height() {
                cells.push(Cell::new(Position::new(x as i32, y as i32), weak.clone()));
            }
        }

        {
            let mut state = self.state_mut();
            state.size = size;
            state.cells = cells;
        }
        debug!(width = size.width(), height = size.height(), "board resized");
    }

    /// Remove every item and reset every cell's debug type to [`Type::NONE`].
    ///
    /// Each removed item goes through the same detach as [`remove_item_at`](Self::remove_item_at):
    /// its `alive` flag is set false and its board reference is reset.
    pub fn clear(&self) {
        let removed = self.clear_items();
        for cell in self.cells() {
            cell.kind().set(Type::NONE);
        }
        debug!(removed, "board cleared");
    }

    fn clear_items(&self) -> usize {
        let items = std::mem::take(&mut self.state_mut().items);
        for item in &items {
            item.detach();
        }
        items.len()
    }

    /// All cells, in creation order (column by column).
    pub fn cells(&self) -> Vec<CellRef> {
        self.state().cells.clone()
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn cell(&self, pos: Position) -> Option<CellRef> {
        self.state()
            .cells
            .iter()
            .find(|cell| cell.position() == pos)
            .cloned()
    }

    /// Items currently on the board, in insertion order.
    pub fn items(&self) -> Vec<ItemRef> {
        self.state().items.clone()
    }

    /// Number of items on the board.
    pub fn item_count(&self) -> usize {
        self.state().items.len()
    }

    /// Item at `pos`, or `None` if the slot is empty.
    pub fn item(&self, pos: Position) -> Option<ItemRef> {
        self.state()
            .items
            .iter()
            .find(|item| item.position().get() == pos)
            .cloned()
    }

    /// Check whether an item sits at `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.item(pos).is_some()
    }

    /// In-bounds orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        let size = self.size();
        pos.neighbors()
            .into_iter()
            .filter(|p| size.contains(*p))
            .collect()
    }

    /// Place `item` at its own position and attach it to this board.
    ///
    /// Fails with [`BoardError::OccupiedPosition`] if the position already holds
    /// an item; the existing occupant and `item` are left untouched.
    ///
    /// An item still attached to another board is moved: it leaves that
    /// board's collection first. A previously removed item is revived, so
    /// `alive` is true exactly while the item sits on a board.
    pub fn add_item(&self, item: ItemRef) -> Result<()> {
        let pos = item.position().get();
        if self.is_occupied(pos) {
            return Err(BoardError::OccupiedPosition(pos));
        }
        self.release_from_previous(&item);
        self.state_mut().items.push(item.clone());
        item.attach(self.downgrade());
        Ok(())
    }

    /// Place several items. Nothing is inserted if any target position is
    /// occupied, or if two of the items share a position.
    pub fn add_items(&self, items: &[ItemRef]) -> Result<()> {
        let mut seen: Vec<Position> = Vec::with_capacity(items.len());
        for item in items {
            let pos = item.position().get();
            if seen.contains(&pos) || self.is_occupied(pos) {
                return Err(BoardError::OccupiedPosition(pos));
            }
            seen.push(pos);
        }

        for item in items {
            self.release_from_previous(item);
        }
        self.state_mut().items.extend(items.iter().cloned());
        let weak = self.downgrade();
        for item in items {
            item.attach(weak.clone());
        }
        Ok(())
    }

    /// Drop `item` from the collection of the other board it is attached to,
    /// without detaching it.
    fn release_from_previous(&self, item: &ItemRef) {
        let Some(other) = item.board() else {
            return;
        };
        if other.ptr_eq(self) {
            return;
        }
        other
            .state_mut()
            .items
            .retain(|held| !Rc::ptr_eq(held, item));
        debug!(position = %item.position().get(), "item moved between boards");
    }

    /// Detach and return the item at `pos`, or `None` if the slot is empty.
    pub fn remove_item_at(&self, pos: Position) -> Option<ItemRef> {
        let item = {
            let mut state = self.state_mut();
            let idx = state
                .items
                .iter()
                .position(|item| item.position().get() == pos)?;
            state.items.remove(idx)
        };
        item.detach();
        Some(item)
    }

    /// Detach and return the item at `item`'s position.
    pub fn remove_item(&self, item: &Item) -> Option<ItemRef> {
        self.remove_item_at(item.position().get())
    }

    /// Remove the items at `positions`, skipping empty slots.
    pub fn remove_items_at(&self, positions: &[Position]) -> Vec<ItemRef> {
        positions
            .iter()
            .filter_map(|&pos| self.remove_item_at(pos))
            .collect()
    }

    /// Remove the given items (by position), skipping those no longer on the board.
    pub fn remove_items(&self, items: &[ItemRef]) -> Vec<ItemRef> {
        items
            .iter()
            .filter_map(|item| self.remove_item(item))
            .collect()
    }

    /// Direction items settle toward.
    pub fn gravity(&self) -> Gravity {
        self.state().gravity
    }

    /// Change the settling direction. Only [`Gravity::Down`] can be iterated.
    pub fn set_gravity(&self, gravity: Gravity) {
        self.state_mut().gravity = gravity;
    }

    /// Clear the board, then place one random item on every cell.
    ///
    /// Types are drawn uniformly from the registry with a freshly seeded
    /// thread-local generator.
    pub fn fill(&self) -> Result<()> {
        self.fill_with_rng(&mut rand::rng())
    }

    /// Same as [`fill`](Self::fill) with a caller-supplied generator.
    ///
    /// Fails with [`BoardError::EmptyTypePool`] if the registry is empty or
    /// gone; the board is left cleared in that case.
    pub fn fill_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        self.clear();

        let pool: Vec<Type> = self
            .inner
            .types
            .upgrade()
            .map(|types| types.borrow().as_slice().to_vec())
            .unwrap_or_default();
        if pool.is_empty() {
            return Err(BoardError::EmptyTypePool);
        }

        let weak = self.downgrade();
        let items: Vec<ItemRef> = self
            .cells()
            .iter()
            .map(|cell| {
                let kind = pool[rng.random_range(0..pool.len())].clone();
                Item::attached(kind, cell.position(), weak.clone())
            })
            .collect();
        let count = items.len();
        self.state_mut().items.extend(items);

        debug!(items = count, types = pool.len(), "board filled");
        Ok(())
    }

    /// Match test for the item at `pos`. An empty slot has no match.
    pub fn has_match_at(&self, pos: Position) -> bool {
        self.item(pos).map(|item| item.has_match()).unwrap_or(false)
    }

    /// Match test for `item`, delegated to the item itself.
    pub fn item_has_match(&self, item: &Item) -> bool {
        item.has_match()
    }

    /// True if any item on the board is part of a match.
    pub fn has_match(&self) -> bool {
        self.items().iter().any(|item| item.has_match())
    }

    /// Every item currently part of a match.
    pub fn matches(&self) -> Vec<ItemRef> {
        self.items()
            .into_iter()
            .filter(|item| item.has_match())
            .collect()
    }

    /// Remove every item currently part of a match and return them.
    ///
    /// This is a single pass: it does not settle the board or look for the
    /// matches that settling might create.
    pub fn find_and_remove_matches(&self) -> Vec<ItemRef> {
        let matched = self.matches();
        let removed = self.remove_items(&matched);
        if !removed.is_empty() {
            trace!(removed = removed.len(), "matches removed");
        }
        removed
    }

    /// Check whether exchanging the items at `a` and `b` would create a match
    /// through either of them. The board is not modified.
    ///
    /// Returns false if either slot is empty.
    pub fn would_match_after_swap(&self, a: Position, b: Position) -> bool {
        let (Some(item_a), Some(item_b)) = (self.item(a), self.item(b)) else {
            return false;
        };
        let kind_a = item_a.kind().get();
        let kind_b = item_b.kind().get();
        let size = self.size();

        let lookup = |p: Position| {
            if p == a {
                Some(kind_b.clone())
            } else if p == b {
                Some(kind_a.clone())
            } else {
                self.item(p).map(|it| it.kind().get())
            }
        };
        matches_through(a, &kind_b, size, &lookup) || matches_through(b, &kind_a, size, &lookup)
    }

    /// One gravity pass.
    ///
    /// Under [`Gravity::Down`], rows are scanned bottom to top (the top row
    /// excluded): whenever `(x, y)` is empty and `(x, y + 1)` holds an item,
    /// that item moves down to `(x, y)`. Returns the items that moved; an empty
    /// result means the board has settled. Multi-row drops need repeated calls.
    ///
    /// Any other gravity fails with [`BoardError::UnsupportedGravity`] before
    /// anything moves.
    pub fn iterate(&self) -> Result<Vec<ItemRef>> {
        let (size, gravity) = {
            let state = self.state();
            (state.size, state.gravity)
        };
        if gravity != Gravity::Down {
            return Err(BoardError::UnsupportedGravity(gravity));
        }

        let mut moved = Vec::new();
        for y in 0..size.height().saturating_sub(1) {
            for x in 0..size.width() {
                let here = Position::new(x as i32, y as i32);
                if self.is_occupied(here) {
                    continue;
                }
                if let Some(upper) = self.item(here.offset(0, 1)) {
                    upper.position().set(here);
                    moved.push(upper);
                }
            }
        }

        trace!(moved = moved.len(), "gravity pass");
        Ok(moved)
    }

    /// Dense view of the current layout.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Board")
            .field("size", &state.size)
            .field("gravity", &state.gravity)
            .field("cells", &state.cells.len())
            .field("items", &state.items.len())
            .finish()
    }
}

/// Grid rendering, top row first, `.` for empty slots.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.snapshot().rows_top_down() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
