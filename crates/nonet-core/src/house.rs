//! The 27 units of a sudoku board.

use crate::Position;

/// A sudoku house (row, column, or 3×3 box).
///
/// A completed board must contain every digit 1-9 exactly once in each of
/// the 27 houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns an iterator over the 9 positions contained in this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}
