//! Dense row-major grid addressed by [`Position`].

use crate::vector::{Position, Size};

/// A `cols x rows` grid of values, stored row-major (`y * cols + x`).
///
/// Row 0 is the bottom row, matching board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix<T> {
    size: Size,
    data: Vec<T>,
}

impl<T: Default + Clone> Matrix<T> {
    /// Create a grid of the given size filled with `T::default()`.
    pub fn new(size: Size) -> Self {
        Self::filled(size, T::default())
    }

    /// Resize the grid. Existing content is discarded.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.data = vec![T::default(); size.area()];
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a grid of the given size with every slot set to `value`.
    pub fn filled(size: Size, value: T) -> Self {
        Self {
            size,
            data: vec![value; size.area()],
        }
    }
}

impl<T> Matrix<T> {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn cols(&self) -> usize {
        self.size.width()
    }

    pub fn rows(&self) -> usize {
        self.size.height()
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.size.contains(pos) {
            return None;
        }
        Some(pos.y() as usize * self.cols() + pos.x() as usize)
    }

    /// Value at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|idx| &self.data[idx])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.index(pos).map(move |idx| &mut self.data[idx])
    }

    /// Store `value` at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.data[idx] = value;
                true
            }
            None => false,
        }
    }

    /// All values in row-major order, bottom row first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Rows as slices, bottom row first.
    pub fn rows_iter(&self) -> impl DoubleEndedIterator<Item = &[T]> {
        // chunks(0) panics, so an empty grid yields no rows.
        let width = self.cols().max(1);
        self.data.chunks(width).take(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_get_set() {
        let mut m: Matrix<u8> = Matrix::new(Size::new(3, 2));
        assert_eq!(m.cols(), 3);
        assert_eq!(m.rows(), 2);
        assert!(m.set(Position::new(2, 1), 7));
        assert_eq!(m.get(Position::new(2, 1)), Some(&7));
        assert_eq!(m.get(Position::new(0, 0)), Some(&0));
        assert_eq!(m.get(Position::new(3, 0)), None);
        assert!(!m.set(Position::new(0, 2), 1));
    }

    #[test]
    fn test_matrix_row_major_layout() {
        let mut m: Matrix<u8> = Matrix::new(Size::new(2, 2));
        m.set(Position::new(1, 0), 1);
        m.set(Position::new(0, 1), 2);
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 0]);

        let rows: Vec<&[u8]> = m.rows_iter().collect();
        assert_eq!(rows, vec![&[0u8, 1][..], &[2u8, 0][..]]);
    }

    #[test]
    fn test_matrix_resize_discards() {
        let mut m = Matrix::filled(Size::new(2, 2), 5u8);
        m.resize(Size::new(1, 3));
        assert_eq!(m.size(), Size::new(1, 3));
        assert!(m.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_matrix_empty_has_no_rows() {
        let m: Matrix<u8> = Matrix::new(Size::new(0, 0));
        assert_eq!(m.rows_iter().count(), 0);
    }
}
