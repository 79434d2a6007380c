//! A set of digits 1-9, stored as a 9-bit mask.

use std::{
    fmt,
    ops::{BitAnd, BitOr},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::digit::Digit;

/// A set of [`Digit`]s, represented as a bitset.
///
/// Bit `i` of the underlying `u16` represents digit `i + 1`. This is compact
/// enough to copy freely, which is what keeps candidate computation and the
/// note grid allocation-free.
///
/// # Examples
///
/// ```
/// use sudoka_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const ALL_BITS: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(ALL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Creates a set from a raw bit mask, returning `None` if any bit outside
    /// the digit range is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !ALL_BITS == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::from_digit(digit).0;
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::from_digit(digit).0;
    }

    /// Returns whether the set contains a digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::from_digit(digit).0 != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the sole member if the set has exactly one digit.
    ///
    /// This is the naked-single test: a cell whose candidate set collapses to
    /// a single digit.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() == 1 {
            self.into_iter().next()
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        self.into_iter()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

impl Serialize for DigitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for DigitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u16::deserialize(deserializer)?;
        Self::try_from_bits(bits)
            .ok_or_else(|| de::Error::custom(format!("invalid digit set bits: {bits:#05x}")))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::from_digit(Digit::D7).as_single(), Some(Digit::D7));
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D5, Digit::D3]
            .into_iter()
            .collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_set_operations() {
        let a: DigitSet = [Digit::D1, Digit::D2, Digit::D3].into_iter().collect();
        let b: DigitSet = [Digit::D2, Digit::D3, Digit::D4].into_iter().collect();

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);

        let only_a = a.difference(b);
        assert_eq!(only_a.iter().collect::<Vec<_>>(), vec![Digit::D1]);
    }

    #[test]
    fn test_try_from_bits_rejects_high_bits() {
        assert_eq!(DigitSet::try_from_bits(0x1ff), Some(DigitSet::FULL));
        assert_eq!(DigitSet::try_from_bits(0x200), None);
        assert_eq!(DigitSet::try_from_bits(0xffff), None);
    }

    #[test]
    fn test_serde_rejects_invalid_bits() {
        let set: DigitSet = serde_json::from_str("5").unwrap();
        assert_eq!(set.bits(), 5);
        assert!(serde_json::from_str::<DigitSet>("512").is_err());
    }

    proptest! {
        #[test]
        fn prop_serde_round_trip(bits in 0u16..=ALL_BITS) {
            let set = DigitSet::try_from_bits(bits).unwrap();
            let json = serde_json::to_string(&set).unwrap();
            let back: DigitSet = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(set, back);
        }

        #[test]
        fn prop_len_matches_iteration(bits in 0u16..=ALL_BITS) {
            let set = DigitSet::try_from_bits(bits).unwrap();
            prop_assert_eq!(set.len(), set.iter().count());
        }
    }
}
