//! Core data structures for the nonet sudoku board viewer.
//!
//! This crate holds the pure data model shared by the game session and the
//! desktop shell:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`DigitSet`]: a 9-bit set of digits, used by the win check
//! - [`Position`]: board cell (x, y) coordinates
//! - [`House`]: the 27 units (rows, columns, 3×3 boxes) of a board
//! - [`Board`]: a 9×9 grid of optional digits and its text-format parser
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Board, Digit, Position};
//!
//! let board: Board = "\
//! 003020600\n\
//! 900305001\n\
//! 001806400\n\
//! 008102900\n\
//! 700000008\n\
//! 006708200\n\
//! 002609500\n\
//! 800203009\n\
//! 005010300"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(board.get(Position::new(2, 0)), Some(Digit::D3));
//! assert_eq!(board.get(Position::new(0, 0)), None);
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardFormatError},
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};
