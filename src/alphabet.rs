use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::Show;

/// A symbol of an alphabet, which is also the type of the symbols in a word.
pub trait Symbol: PartialEq + Eq + Debug + Copy + Ord + PartialOrd + Hash + Show {}
impl<S: PartialEq + Eq + Debug + Copy + Ord + PartialOrd + Hash + Show> Symbol for S {}

/// An alphabet is a finite collection of [`Symbol`]s together with a canonical order on them.
/// Every search in this crate explores the symbols of an alphabet in this canonical order, which
/// makes the produced witnesses reproducible.
pub trait Alphabet: Clone + Debug {
    /// The type of symbols in this alphabet.
    type Symbol: Symbol;

    /// Returns an iterator over all symbols in the alphabet in canonical order.
    fn universe(&self) -> impl Iterator<Item = Self::Symbol> + '_;

    /// Returns the position of `symbol` in the canonical order or `None` if the symbol is not
    /// part of the alphabet.
    fn position(&self, symbol: Self::Symbol) -> Option<usize>;

    /// Returns the number of symbols in the alphabet.
    fn size(&self) -> usize;

    /// Returns the alphabet consisting of the symbols that `self` and `other` have in common,
    /// ordered as in `self`.
    fn intersection(&self, other: &Self) -> Self;

    /// Returns true if the given symbol is present in the alphabet.
    fn contains(&self, symbol: Self::Symbol) -> bool {
        self.position(symbol).is_some()
    }

    /// Returns true if the alphabet has no symbols.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Represents an alphabet where a [`Symbol`] is just a single `char`. The canonical order is
/// the order in which the symbols were given.
///
/// # Example
/// ```
/// use dfa_decide::prelude::*;
///
/// let alphabet = CharAlphabet::from_iter(['b', 'a', 'b']);
/// assert_eq!(alphabet.universe().collect::<Vec<_>>(), vec!['b', 'a']);
/// assert_eq!(CharAlphabet::default(), CharAlphabet::of_size(2));
/// ```
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub struct CharAlphabet(Vec<char>);

impl CharAlphabet {
    /// Creates a new [`CharAlphabet`] alphabet of the given size. The symbols are just the first `size` letters
    /// of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }

    /// Returns the symbols as a slice in canonical order.
    pub fn symbols(&self) -> &[char] {
        &self.0
    }
}

/// The default alphabet is the two-letter alphabet `{a, b}`.
impl Default for CharAlphabet {
    fn default() -> Self {
        Self::of_size(2)
    }
}

impl std::ops::Index<usize> for CharAlphabet {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<char> for CharAlphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().unique().collect())
    }
}

impl std::fmt::Display for CharAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl Alphabet for CharAlphabet {
    type Symbol = char;

    fn universe(&self) -> impl Iterator<Item = Self::Symbol> + '_ {
        self.0.iter().copied()
    }

    fn position(&self, symbol: Self::Symbol) -> Option<usize> {
        self.0.iter().position(|c| *c == symbol)
    }

    fn size(&self) -> usize {
        self.0.len()
    }

    fn intersection(&self, other: &Self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|c| other.contains(**c))
                .copied()
                .collect(),
        )
    }
}
