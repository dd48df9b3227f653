use crate::alphabet::Symbol;

/// A finite sequence of symbols that can be fed to an automaton. Implemented for string slices
/// and strings (with `char` symbols) as well as for vectors and slices of arbitrary symbols.
pub trait FiniteWord<S: Symbol> {
    /// Returns an iterator over the symbols of the word from left to right.
    fn symbols(&self) -> impl Iterator<Item = S> + '_;

    /// Collects the symbols into a vector.
    fn collect_vec(&self) -> Vec<S> {
        self.symbols().collect()
    }
}

impl FiniteWord<char> for str {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl FiniteWord<char> for String {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl<S: Symbol> FiniteWord<S> for [S] {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.iter().copied()
    }
}

impl<S: Symbol> FiniteWord<S> for Vec<S> {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.iter().copied()
    }
}

impl<S: Symbol, W: FiniteWord<S> + ?Sized> FiniteWord<S> for &W {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        W::symbols(*self)
    }
}

/// Enumerates all finite words over the given symbols in length-lexicographic order, where the
/// order on symbols is the one in which they are given. The iterator never ends, so it is
/// usually combined with `take_while`.
pub struct KleeneStar<S> {
    symbols: Vec<S>,
    current: Vec<usize>,
}

impl<S: Symbol> Iterator for KleeneStar<S> {
    type Item = Vec<S>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.symbols.is_empty() && !self.current.is_empty() {
            return None;
        }
        let out = self.current.iter().map(|i| self.symbols[*i]).collect();

        let mut carry = true;
        let mut i = self.current.len();
        while carry && i > 0 {
            i -= 1;
            self.current[i] += 1;
            if self.current[i] >= self.symbols.len() {
                self.current[i] = 0;
            } else {
                carry = false;
            }
        }

        if carry {
            self.current = vec![0; self.current.len() + 1];
        }

        Some(out)
    }
}

impl<S> KleeneStar<S> {
    /// Starts the enumeration with the empty word.
    pub fn new(symbols: Vec<S>) -> Self {
        Self {
            symbols,
            current: vec![],
        }
    }

    /// Starts the enumeration with the words of length one.
    pub fn non_empty(symbols: Vec<S>) -> Self {
        assert!(!symbols.is_empty(), "need at least one symbol");
        Self {
            symbols,
            current: vec![0],
        }
    }
}
