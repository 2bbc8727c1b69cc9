//! Per-cell session state.

use nonet_core::Digit;

/// The state of a single board cell during play.
///
/// The distinction between [`Given`](CellState::Given) and
/// [`Filled`](CellState::Filled) is what lets the session enforce given-cell
/// immutability, and lets the UI render givens in a different style from
/// player entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A fixed cell from the starting board; never player-editable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// A blank cell.
    Empty,
}

impl CellState {
    /// Returns the digit shown in the cell, if any.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D8).as_digit(), Some(Digit::D8));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_variant_helpers() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Given(Digit::D1).is_filled());
    }
}
