//! Board cell coordinates.

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom).
///
/// # Examples
///
/// ```
/// use nonet_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8, left to right, top to bottom) of the 3×3 box
    /// containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Converts a box index and a cell index within that box (both 0-8)
    /// into an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self {
            x: (box_index % 3) * 3 + cell_index % 3,
            y: (box_index / 3) * 3 + cell_index / 3,
        }
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.y == 0 {
            None
        } else {
            Some(Self {
                x: self.x,
                y: self.y - 1,
            })
        }
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.y == 8 {
            None
        } else {
            Some(Self {
                x: self.x,
                y: self.y + 1,
            })
        }
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.x == 0 {
            None
        } else {
            Some(Self {
                x: self.x - 1,
                y: self.y,
            })
        }
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.x == 8 {
            None
        } else {
            Some(Self {
                x: self.x + 1,
                y: self.y,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for box_index in 0..9 {
            for cell_index in 0..9 {
                let pos = Position::from_box(box_index, cell_index);
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    fn test_movement_edges() {
        assert_eq!(Position::new(0, 0).up(), None);
        assert_eq!(Position::new(0, 0).left(), None);
        assert_eq!(Position::new(8, 8).down(), None);
        assert_eq!(Position::new(8, 8).right(), None);

        assert_eq!(Position::new(4, 4).up(), Some(Position::new(4, 3)));
        assert_eq!(Position::new(4, 4).down(), Some(Position::new(4, 5)));
        assert_eq!(Position::new(4, 4).left(), Some(Position::new(3, 4)));
        assert_eq!(Position::new(4, 4).right(), Some(Position::new(5, 4)));
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
