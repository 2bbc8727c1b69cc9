//! Sudoku game session management for the nonet board viewer.
//!
//! This crate owns the mutable state of one puzzle session: which cells are
//! fixed givens, what the player has entered, and whether the session has
//! been won. The session is seeded from a [`Board`](nonet_core::Board)
//! produced by the `nonet-core` parser and is driven by a presentation
//! layer that selects cells and issues mutations.
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Board, Digit, Position};
//! use nonet_game::Game;
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
//! let mut game = Game::new(&board);
//!
//! // Free cells accept player input; givens do not.
//! assert!(game.set_digit(Position::new(0, 0), Digit::D4).is_ok());
//! assert!(game.set_digit(Position::new(2, 0), Digit::D1).is_err());
//! assert!(!game.check_win());
//! ```

pub mod cell_state;
pub mod game;

pub use self::{
    cell_state::CellState,
    game::{Game, GameError, GameStatus},
};
