use tracing::debug;

use crate::prelude::*;

/// Names one of the two automata that take part in an equivalence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// The automaton that was given first.
    First,
    /// The automaton that was given second.
    Second,
}

impl Side {
    /// Returns the other side.
    pub fn flip(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Returns `1` for [`Side::First`] and `2` for [`Side::Second`].
    pub fn number(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 2,
        }
    }
}

/// The outcome of an equivalence check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquivalenceResult<S> {
    /// No word on which both automata can take all their steps is accepted by exactly one of
    /// them. For complete automata this means they accept the same language.
    Equivalent,
    /// The languages differ. `witness` is a shortest word that is accepted by exactly one of the
    /// two automata, namely the one given by `accepted_by`.
    Different {
        /// A shortest word in the symmetric difference of the two languages.
        witness: Vec<S>,
        /// The automaton that accepts `witness`.
        accepted_by: Side,
    },
}

impl<S> EquivalenceResult<S> {
    /// Returns true if the automata are equivalent.
    pub fn is_equivalent(&self) -> bool {
        matches!(self, EquivalenceResult::Equivalent)
    }

    /// Returns the witness, if there is one.
    pub fn witness(&self) -> Option<&[S]> {
        match self {
            EquivalenceResult::Equivalent => None,
            EquivalenceResult::Different { witness, .. } => Some(witness),
        }
    }

    /// Returns the side that accepts the witness, if there is one.
    pub fn accepted_by(&self) -> Option<Side> {
        match self {
            EquivalenceResult::Equivalent => None,
            EquivalenceResult::Different { accepted_by, .. } => Some(*accepted_by),
        }
    }
}

fn differ((left, right): (bool, bool)) -> bool {
    left ^ right
}

/// The symmetric difference automaton of two `bool` colored transition systems: their
/// [`MatchingProduct`] where a pair is accepting iff exactly one of its components is.
pub type SymmetricDifference<L, R> = MapStateColor<MatchingProduct<L, R>, fn((bool, bool)) -> bool>;

/// Builds the [`SymmetricDifference`] of `left` and `right`. Like the product it is based on,
/// it is computed lazily while it is being explored.
///
/// If either side has no move on some symbol, the product has none either. Words that leave the
/// product this way are rejected by at least one side. They are only in the symmetric
/// difference if the other side accepts them, which the product does not track.
pub fn symmetric_difference<L, R>(left: L, right: R) -> SymmetricDifference<L, R>
where
    L: TransitionSystem<StateColor = bool>,
    R: TransitionSystem<Alphabet = L::Alphabet, StateColor = bool>,
{
    left.ts_product(right)
        .map_state_colors(differ as fn((bool, bool)) -> bool)
}

/// Decides whether `left` and `right` accept the same language. This is the case iff their
/// [`SymmetricDifference`] accepts nothing, which is decided with the breadth-first search of
/// [`Pointed::give_word`] starting from the pair of initial states. If a word is found, it is
/// attributed to `left` if `left` accepts it and to `right` otherwise.
///
/// The product only follows symbols on which both sides have a move, so for partial automata
/// the check is restricted to words that neither of them gets stuck on. To compare partial
/// automata on all words, complete them first with [`DFA::completed`].
///
/// # Example
/// ```
/// use dfa_decide::prelude::*;
///
/// let accepts_empty = DFABuilder::default().with_state_colors([true]).into_dfa(0).unwrap();
/// let rejects_all = DFABuilder::default().with_state_colors([false]).into_dfa(0).unwrap();
///
/// assert_eq!(
///     check_equivalence(&accepts_empty, &rejects_all),
///     EquivalenceResult::Different { witness: vec![], accepted_by: Side::First }
/// );
/// assert!(check_equivalence(&rejects_all, &rejects_all).is_equivalent());
/// ```
pub fn check_equivalence<L, R>(left: &L, right: &R) -> EquivalenceResult<SymbolOf<L>>
where
    L: Pointed<StateColor = bool>,
    R: Pointed<Alphabet = L::Alphabet, StateColor = bool>,
{
    match symmetric_difference(left, right).give_word() {
        None => {
            debug!("symmetric difference is empty");
            EquivalenceResult::Equivalent
        }
        Some(witness) => {
            let accepted_by = if left.accepts(&witness) {
                Side::First
            } else {
                Side::Second
            };
            debug_assert_ne!(left.accepts(&witness), right.accepts(&witness));
            debug!(
                "automata differ on {} which is accepted by automaton {}",
                witness.show(),
                accepted_by.number()
            );
            EquivalenceResult::Different {
                witness,
                accepted_by,
            }
        }
    }
}

impl<A: Alphabet> DFA<A> {
    /// Checks whether `self` is equivalent to `other`, i.e. whether the two DFAs accept the same
    /// language, and gives back a shortest word on which they disagree if they are not. See
    /// [`check_equivalence`] for how missing transitions are treated.
    pub fn equivalence(&self, other: &DFA<A>) -> EquivalenceResult<A::Symbol> {
        check_equivalence(self, other)
    }

    /// Returns true if `self` and `other` accept the same language.
    pub fn equivalent(&self, other: &DFA<A>) -> bool {
        self.equivalence(other).is_equivalent()
    }

    /// Attempts to separate the state `left` from the state `right` by finding a shortest word
    /// that leads to different colors when read from either state. The returned word is thus in
    /// the symmetric difference of the languages accepted from the two states. Returns `None` if
    /// the states are equivalent or one of them does not exist.
    pub fn separate(&self, left: DefaultIdType, right: DefaultIdType) -> Option<Vec<A::Symbol>> {
        if left as usize >= self.size() || right as usize >= self.size() {
            return None;
        }
        symmetric_difference(self, self).give_word_from(ProductIndex(left, right))
    }
}
