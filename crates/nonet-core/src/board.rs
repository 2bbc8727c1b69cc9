//! A 9×9 board of optional digits and its text-format parser.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits, row-major. `None` is a blank cell.
///
/// Boards are loaded from a plain-text format of exactly 9 lines of 9 ASCII
/// decimal digits, where `'0'` marks a blank:
///
/// ```
/// use nonet_core::{Board, Digit, Position};
///
/// let board: Board = "\
/// 003020600\n\
/// 900305001\n\
/// 001806400\n\
/// 008102900\n\
/// 700000008\n\
/// 006708200\n\
/// 002609500\n\
/// 800203009\n\
/// 005010300"
///     .parse()
///     .unwrap();
///
/// assert_eq!(board[Position::new(2, 0)], Some(Digit::D3));
/// assert_eq!(board[Position::new(0, 0)], None);
/// ```
///
/// Parsing performs no sudoku-legality validation: a board with duplicate
/// givens in a row loads fine. Only a completed board is ever validated,
/// by the game session's win check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    const fn offset(pos: Position) -> usize {
        pos.y() as usize * 9 + pos.x() as usize
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// blank.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[Self::offset(pos)]
    }

    /// Sets or clears the digit at the given position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[Self::offset(pos)] = digit;
    }

    /// Parses a board from a sequence of text lines.
    ///
    /// Each line is trimmed of surrounding whitespace before validation, so
    /// trailing newlines or carriage returns in file input are harmless.
    ///
    /// # Errors
    ///
    /// Returns [`BoardFormatError`] if the input does not contain exactly
    /// 9 lines, if any trimmed line is not exactly 9 characters, or if any
    /// character is not an ASCII decimal digit. No partial board is
    /// produced.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, BoardFormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = [None; 81];
        let mut count = 0;
        for (y, line) in lines.into_iter().enumerate() {
            count += 1;
            if y >= 9 {
                continue;
            }
            let line = line.as_ref().trim();
            let len = line.chars().count();
            if len != 9 {
                return Err(BoardFormatError::LineLength { line: y, len });
            }
            for (x, c) in line.chars().enumerate() {
                if !c.is_ascii_digit() {
                    return Err(BoardFormatError::InvalidCharacter {
                        line: y,
                        column: x,
                        character: c,
                    });
                }
                // '0' is a blank cell
                cells[y * 9 + x] = Digit::from_ascii(c);
            }
        }
        if count != 9 {
            return Err(BoardFormatError::LineCount { count });
        }
        Ok(Self { cells })
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[Self::offset(pos)]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[Self::offset(pos)]
    }
}

impl FromStr for Board {
    type Err = BoardFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "0")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors from parsing a board from its 9-line text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardFormatError {
    /// The input did not contain exactly 9 lines.
    #[display("board must be 9 lines long, got {count}")]
    LineCount {
        /// Number of lines in the input.
        count: usize,
    },
    /// A line was not exactly 9 characters long after trimming.
    #[display("line {line} must be 9 characters long, got {len}")]
    LineLength {
        /// Zero-based line index.
        line: usize,
        /// Number of characters in the trimmed line.
        len: usize,
    },
    /// A character was not an ASCII decimal digit.
    #[display("invalid character {character:?} at line {line}, column {column}")]
    InvalidCharacter {
        /// Zero-based line index.
        line: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const VALID_BOARD: &str = "\
003020600\n\
900305001\n\
001806400\n\
008102900\n\
700000008\n\
006708200\n\
002609500\n\
800203009\n\
005010300";

    #[test]
    fn test_parse_valid_board() {
        let board: Board = VALID_BOARD.parse().unwrap();

        // Spot-check values against the source text
        for (y, line) in VALID_BOARD.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(x as u8, y as u8);
                let expected = Digit::from_ascii(c);
                assert_eq!(board[pos], expected, "mismatch at {pos:?}");
            }
        }
    }

    #[test]
    fn test_parse_trims_line_whitespace() {
        let padded: String = VALID_BOARD
            .lines()
            .map(|line| format!("  {line}\t\n"))
            .collect();
        let board: Board = padded.parse().unwrap();
        assert_eq!(board, VALID_BOARD.parse().unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_line_count() {
        let short: Vec<_> = VALID_BOARD.lines().take(8).collect();
        assert_eq!(
            Board::from_lines(short),
            Err(BoardFormatError::LineCount { count: 8 })
        );

        let long: Vec<_> = VALID_BOARD.lines().chain(["123456789"]).collect();
        assert_eq!(
            Board::from_lines(long),
            Err(BoardFormatError::LineCount { count: 10 })
        );

        assert_eq!(
            Board::from_lines(Vec::<&str>::new()),
            Err(BoardFormatError::LineCount { count: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_line_length() {
        let mut lines: Vec<String> = VALID_BOARD.lines().map(String::from).collect();
        lines[3] = "12345678".into();
        assert_eq!(
            Board::from_lines(&lines),
            Err(BoardFormatError::LineLength { line: 3, len: 8 })
        );

        lines[3] = "1234567890".into();
        assert_eq!(
            Board::from_lines(&lines),
            Err(BoardFormatError::LineLength { line: 3, len: 10 })
        );
    }

    #[test]
    fn test_parse_rejects_non_digit() {
        let mut lines: Vec<String> = VALID_BOARD.lines().map(String::from).collect();
        lines[5] = "12345x789".into();
        assert_eq!(
            Board::from_lines(&lines),
            Err(BoardFormatError::InvalidCharacter {
                line: 5,
                column: 5,
                character: 'x'
            })
        );
    }

    #[test]
    fn test_parse_allows_illegal_givens() {
        // Duplicate givens in a row are not the loader's concern
        let lines = ["110000000"; 9];
        assert!(Board::from_lines(lines).is_ok());
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = VALID_BOARD.parse().unwrap();
        assert_eq!(board.to_string(), VALID_BOARD);
    }

    #[test]
    fn test_index_mut() {
        let mut board = Board::new();
        let pos = Position::new(4, 4);
        board[pos] = Some(Digit::D7);
        assert_eq!(board.get(pos), Some(Digit::D7));
        board.set(pos, None);
        assert_eq!(board[pos], None);
    }

    proptest! {
        #[test]
        fn prop_parse_matches_source(values in prop::collection::vec(0_u8..=9, 81)) {
            let text: String = values
                .chunks(9)
                .map(|row| {
                    let line: String = row.iter().map(|v| char::from(b'0' + v)).collect();
                    format!("{line}\n")
                })
                .collect();
            let board: Board = text.parse().unwrap();
            for (i, value) in values.iter().enumerate() {
                let pos = Position::ALL[i];
                let expected = (*value != 0).then(|| Digit::from_value(*value));
                prop_assert_eq!(board[pos], expected);
            }
            // Display round-trips through the parser
            let round_trip: Board = board.to_string().parse().unwrap();
            prop_assert_eq!(round_trip, board);
        }
    }
}
