//! A set of sudoku digits, backed by a 9-bit mask.

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// Bits 0-8 of the underlying 16-bit integer represent digits 1-9
/// respectively. The win check tallies each unit of the board into a
/// `DigitSet` and compares it against [`DigitSet::FULL`]: a unit is valid
/// exactly when it contains all nine digits with no blanks and no
/// duplicates.
///
/// # Examples
///
/// ```
/// use nonet_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// set.insert(Digit::D1);
/// set.insert(Digit::D5);
/// set.insert(Digit::D9);
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(Digit::D5));
/// assert_ne!(set, DigitSet::FULL);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set. Inserting a digit already present has
    /// no effect.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        // Duplicate insert has no effect
        set.insert(Digit::D1);
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_full_from_all_digits() {
        let set: DigitSet = Digit::ALL.into_iter().collect();
        assert_eq!(set, DigitSet::FULL);
    }

    #[test]
    fn test_iteration_order() {
        let set: DigitSet =
            [Digit::D9, Digit::D1, Digit::D5, Digit::D3].into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_iter_len() {
        let set: DigitSet = [Digit::D2, Digit::D4].into_iter().collect();
        let iter = set.iter();
        assert_eq!(iter.len(), 2);
    }
}
