//! The puzzle session and its win check.

use nonet_core::{Board, Digit, DigitSet, House, Position};

use crate::CellState;

/// A sudoku puzzle session.
///
/// Owns the working grid seeded from a starting [`Board`]: nonzero cells of
/// the board become immutable [`CellState::Given`] cells, blanks become
/// [`CellState::Empty`]. All mutation goes through [`set_digit`] and
/// [`clear_cell`], which reject writes to given cells, so the starting
/// board is recoverable from the session at any time.
///
/// Completion is only ever computed on demand via [`check_win`], never
/// proactively — a board whose givens already form a solution still starts
/// in progress.
///
/// [`set_digit`]: Game::set_digit
/// [`clear_cell`]: Game::clear_cell
/// [`check_win`]: Game::check_win
///
/// # Example
///
/// ```
/// use nonet_core::{Board, Digit, Position};
/// use nonet_game::{CellState, Game, GameStatus};
///
/// let board = Board::new(); // all cells free
/// let mut game = Game::new(&board);
///
/// let pos = Position::new(4, 4);
/// game.set_digit(pos, Digit::D5).unwrap();
/// assert_eq!(game.cell(pos), &CellState::Filled(Digit::D5));
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    status: GameStatus,
}

/// The lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// The puzzle has not been completed yet.
    InProgress,
    /// The win check has succeeded; the session is terminal until
    /// [`Game::reset`] is called.
    Completed,
}

/// Errors from mutating a session.
///
/// These are recoverable: a failed mutation leaves the session unchanged,
/// and the host typically ignores the request or informs the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell is a given cell from the starting board.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The session has already been won; only [`Game::reset`] is allowed.
    #[display("session is already completed")]
    SessionCompleted,
}

impl Game {
    /// Creates a new session from a starting board.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        let mut cells = [const { CellState::Empty }; 81];
        for (cell, pos) in cells.iter_mut().zip(Position::ALL) {
            if let Some(digit) = board[pos] {
                *cell = CellState::Given(digit);
            }
        }
        Self {
            cells,
            status: GameStatus::InProgress,
        }
    }

    const fn offset(pos: Position) -> usize {
        pos.y() as usize * 9 + pos.x() as usize
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[Self::offset(pos)]
    }

    /// Returns the starting-board digit at the given position, or `None`
    /// if the cell started blank.
    ///
    /// This is how the UI distinguishes given cells from player entries.
    #[must_use]
    pub fn given(&self, pos: Position) -> Option<Digit> {
        match self.cell(pos) {
            CellState::Given(digit) => Some(*digit),
            CellState::Filled(_) | CellState::Empty => None,
        }
    }

    /// Returns the digit currently shown at the given position, whether a
    /// given or a player entry.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).as_digit()
    }

    /// Returns the session's lifecycle state.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    fn ensure_mutable(&self, pos: Position) -> Result<(), GameError> {
        if self.status.is_completed() {
            return Err(GameError::SessionCompleted);
        }
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        Ok(())
    }

    /// Places a digit at the given position. Replaces any previous player
    /// entry in that cell.
    ///
    /// This does not invoke the win check; the host decides when to call
    /// [`Game::check_win`], typically after every successful mutation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds
    /// a given cell, or [`GameError::SessionCompleted`] if the session has
    /// already been won. Failed calls leave the session unchanged.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        self.ensure_mutable(pos)?;
        self.cells[Self::offset(pos)] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player entry at the given position. Clearing an empty
    /// cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds
    /// a given cell, or [`GameError::SessionCompleted`] if the session has
    /// already been won.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_mutable(pos)?;
        self.cells[Self::offset(pos)] = CellState::Empty;
        Ok(())
    }

    fn house_is_complete(&self, house: House) -> bool {
        let mut seen = DigitSet::new();
        for pos in house.positions() {
            // A blank cell fails the unit outright
            let Some(digit) = self.cell(pos).as_digit() else {
                return false;
            };
            seen.insert(digit);
        }
        seen == DigitSet::FULL
    }

    /// Evaluates the win condition over the current grid.
    ///
    /// The puzzle is complete when every row, every column, and every 3×3
    /// box reads as the exact digit set 1-9. Any blank cell fails its
    /// units automatically; a duplicate leaves its unit's tally short of
    /// the full set.
    ///
    /// On success the session transitions to [`GameStatus::Completed`] and
    /// stays there: re-checking a completed session returns `true` without
    /// rescanning. This method never fails.
    pub fn check_win(&mut self) -> bool {
        if self.status.is_completed() {
            return true;
        }
        let won = House::ALL
            .into_iter()
            .all(|house| self.house_is_complete(house));
        if won {
            self.status = GameStatus::Completed;
        }
        won
    }

    /// Clears all player entries, restoring the session to its starting
    /// board, and returns the status to [`GameStatus::InProgress`].
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
        self.status = GameStatus::InProgress;
    }
}
