use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Matrix, Position, Size};

/// Dense, serializable copy of a board layout for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub gravity: String,
    /// Row-major, bottom row first. `None` marks an empty slot.
    pub tiles: Vec<Option<String>>,
    pub item_count: usize,
    /// FNV-1a 64 over `tiles`.
    pub board_hash: u64,
}

impl BoardSnapshot {
    pub(crate) fn capture(board: &Board) -> Self {
        let size = board.size();
        let mut grid: Matrix<Option<String>> = Matrix::new(size);
        let items = board.items();
        for item in &items {
            grid.set(item.position().get(), Some(item.kind().get().name().to_string()));
        }

        let tiles: Vec<Option<String>> = grid.iter().cloned().collect();
        let board_hash = hash_tiles(&tiles);
        Self {
            width: size.width(),
            height: size.height(),
            gravity: board.gravity().as_str().to_string(),
            tiles,
            item_count: items.len(),
            board_hash,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Type name at `pos`, or `None` when empty or out of bounds.
    pub fn tile(&self, pos: Position) -> Option<&str> {
        if !self.size().contains(pos) {
            return None;
        }
        let idx = pos.y() as usize * self.width + pos.x() as usize;
        self.tiles.get(idx).and_then(|t| t.as_deref())
    }

    pub fn to_matrix(&self) -> Matrix<Option<String>> {
        let mut grid = Matrix::new(self.size());
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x as i32, y as i32);
                grid.set(pos, self.tile(pos).map(str::to_string));
            }
        }
        grid
    }

    /// Text rows, top row first, columns padded to the longest name.
    pub fn rows_top_down(&self) -> Vec<String> {
        let grid = self.to_matrix();
        let width = self
            .tiles
            .iter()
            .flatten()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);

        grid.rows_iter()
            .rev()
            .map(|row| {
                row.iter()
                    .map(|tile| format!("{:<width$}", tile.as_deref().unwrap_or(".")))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

/// FNV-1a 64-bit hash of a tile layout.
///
/// Each slot contributes a presence byte, then the name bytes, then a unit
/// separator, so empty slots and name boundaries are distinguished.
pub fn hash_tiles(tiles: &[Option<String>]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    let mut feed = |b: u8| {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    };
    for tile in tiles {
        match tile {
            Some(name) => {
                feed(1);
                name.bytes().for_each(&mut feed);
            }
            None => feed(0),
        }
        feed(0x1f);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SharedTypes;
    use crate::item::Item;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_snapshot_layout_and_text() {
        let types: SharedTypes = Rc::new(RefCell::new(["red", "b"].into_iter().collect()));
        let board = Board::new(&types);
        board.resize(Size::new(3, 2));
        board.add_item(Item::new("red", Position::new(0, 0))).unwrap();
        board.add_item(Item::new("b", Position::new(2, 1))).unwrap();

        let snap = board.snapshot();
        assert_eq!(snap.tile(Position::new(0, 0)), Some("red"));
        assert_eq!(snap.tile(Position::new(2, 1)), Some("b"));
        assert_eq!(snap.tile(Position::new(1, 0)), None);
        assert_eq!(snap.tile(Position::new(5, 5)), None);
        assert_eq!(snap.item_count, 2);
        assert_eq!(snap.rows_top_down(), vec![".   .   b", "red .   ."]);
    }

    #[test]
    fn test_hash_distinguishes_layouts() {
        let a = vec![Some("ab".to_string()), None];
        let b = vec![Some("a".to_string()), Some("b".to_string())];
        assert_ne!(hash_tiles(&a), hash_tiles(&b));
        assert_eq!(hash_tiles(&a), hash_tiles(&a.clone()));
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let types: SharedTypes = Rc::new(RefCell::new(["a"].into_iter().collect()));
        let board = Board::new(&types);
        board.resize(Size::new(2, 2));
        board.fill().unwrap();

        let snap = board.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
        assert_eq!(back.board_hash, hash_tiles(&back.tiles));
    }
}
