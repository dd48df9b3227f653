use std::{fmt::Debug, hash::Hash};

use tracing::trace;

use crate::{
    alphabet::Alphabet,
    automaton::{SearchResult, Side},
    word::FiniteWord,
    Show,
};

/// Contains the [`DFABuilder`] through which all automata are constructed.
pub mod builder;
pub use builder::{ConstructionError, DFABuilder};

/// Lazy combinators on transition systems, most importantly the product.
pub mod operations;
use operations::{MapStateColor, MatchingProduct};

/// Breadth-first exploration of the reachable part of a transition system.
pub mod reachable;
use reachable::MinimalRepresentatives;

/// The type that is used to index states of a [`crate::automaton::DFA`].
pub type DefaultIdType = u32;

/// Something that can be used to identify a state. It must be cheap to copy and hashable, as
/// the searches keep sets of visited state indices.
pub trait IdType: Copy + Eq + Ord + Hash + Debug + Show {}
impl<T: Copy + Eq + Ord + Hash + Debug + Show> IdType for T {}

/// A color is simply a type that can be used to color states.
pub trait Color: Clone + Eq + Hash + Debug {}
impl<T: Clone + Eq + Hash + Debug> Color for T {}

/// Type alias for the symbols of the alphabet of a transition system.
pub type SymbolOf<Ts> = <<Ts as TransitionSystem>::Alphabet as Alphabet>::Symbol;
/// Type alias for the state index of a transition system.
pub type StateIndex<Ts> = <Ts as TransitionSystem>::StateIndex;

/// A deterministic transition system. It consists of a set of states, each of which may carry a
/// color, and a partial successor function that maps a state and a symbol to at most one
/// successor state. If no successor exists, the transition system has no move on that symbol,
/// which is a regular outcome and not an error.
///
/// Most of the functionality of this crate is built on top of this trait. The combinators
/// [`Self::ts_product`] and [`Self::map_state_colors`] consume `self` and return a new transition
/// system that computes its transitions on demand. If the original should continue to exist,
/// call them on a reference.
pub trait TransitionSystem: Sized {
    /// The alphabet over which the transitions are labeled.
    type Alphabet: Alphabet;
    /// The type of the indices of the states.
    type StateIndex: IdType;
    /// The type of the colors on the states.
    type StateColor: Color;

    /// Returns a reference to the alphabet of `self`.
    fn alphabet(&self) -> &Self::Alphabet;

    /// Returns the successor that is reached from `state` on `symbol`, or `None` if there is no
    /// such transition (or `state` does not exist).
    fn successor_index(
        &self,
        state: Self::StateIndex,
        symbol: SymbolOf<Self>,
    ) -> Option<Self::StateIndex>;

    /// Returns the color of `state` or `None` if the state does not exist.
    fn state_color(&self, state: Self::StateIndex) -> Option<Self::StateColor>;

    /// Returns the state that is reached by reading `word` from `origin`. Reading stops at the
    /// first symbol for which no transition exists, in which case `None` is returned and the rest
    /// of the word is never looked at.
    fn reached_state_index_from<W: FiniteWord<SymbolOf<Self>>>(
        &self,
        origin: Self::StateIndex,
        word: W,
    ) -> Option<Self::StateIndex> {
        word.symbols()
            .try_fold(origin, |state, symbol| self.successor_index(state, symbol))
    }

    /// Builds the product of `self` with `other`. Its states are pairs of states and it has a
    /// transition on some symbol iff both components have one.
    fn ts_product<R>(self, other: R) -> MatchingProduct<Self, R>
    where
        R: TransitionSystem<Alphabet = Self::Alphabet>,
    {
        MatchingProduct::new(self, other)
    }

    /// Relabels the state colors of `self` through the function `f`.
    fn map_state_colors<D, F>(self, f: F) -> MapStateColor<Self, F>
    where
        D: Color,
        F: Fn(Self::StateColor) -> D,
    {
        MapStateColor::new(self, f)
    }

    /// Returns an iterator over the states reachable from `origin` together with their
    /// length-lexicographically minimal access words.
    fn minimal_representatives_from(
        &self,
        origin: Self::StateIndex,
    ) -> MinimalRepresentatives<&Self> {
        MinimalRepresentatives::new(self, origin)
    }

    /// Returns the indices of all states that are reachable from `origin`, in the order in which
    /// a breadth-first search discovers them.
    fn reachable_state_indices_from(
        &self,
        origin: Self::StateIndex,
    ) -> impl Iterator<Item = Self::StateIndex> + '_ {
        self.minimal_representatives_from(origin)
    }

    /// Searches for a shortest word that leads from `origin` to a state colored `true`, see
    /// [`Pointed::give_word`].
    fn give_word_from(&self, origin: Self::StateIndex) -> Option<Vec<SymbolOf<Self>>>
    where
        Self: TransitionSystem<StateColor = bool>,
    {
        let mut representatives = self.minimal_representatives_from(origin);
        while let Some(q) = representatives.next() {
            if self.state_color(q).unwrap_or(false) {
                let word = representatives.access_word(q);
                trace!("reached marked state {} via {}", q.show(), word.show());
                return Some(word);
            }
        }
        trace!(
            "explored {} reachable states without finding a marked one",
            representatives.seen()
        );
        None
    }
}

impl<Ts: TransitionSystem> TransitionSystem for &Ts {
    type Alphabet = Ts::Alphabet;
    type StateIndex = Ts::StateIndex;
    type StateColor = Ts::StateColor;

    fn alphabet(&self) -> &Self::Alphabet {
        Ts::alphabet(self)
    }

    fn successor_index(
        &self,
        state: Self::StateIndex,
        symbol: SymbolOf<Self>,
    ) -> Option<Self::StateIndex> {
        Ts::successor_index(self, state, symbol)
    }

    fn state_color(&self, state: Self::StateIndex) -> Option<Self::StateColor> {
        Ts::state_color(self, state)
    }
}

/// A transition system with a designated initial state. Together with `bool` state colors, where
/// `true` marks accepting states, this is all that is needed to decide emptiness and equivalence.
pub trait Pointed: TransitionSystem {
    /// Returns the initial state.
    fn initial(&self) -> Self::StateIndex;

    /// Returns the state that is reached by reading `word` from the initial state, see
    /// [`TransitionSystem::reached_state_index_from`].
    fn reached_state_index<W: FiniteWord<SymbolOf<Self>>>(
        &self,
        word: W,
    ) -> Option<Self::StateIndex> {
        self.reached_state_index_from(self.initial(), word)
    }

    /// Runs `self` on `word` and returns whether it is accepted. A word is accepted iff reading it
    /// from the initial state succeeds and ends in a state colored `true`. The empty word is thus
    /// accepted iff the initial state is accepting.
    fn accepts<W: FiniteWord<SymbolOf<Self>>>(&self, word: W) -> bool
    where
        Self: TransitionSystem<StateColor = bool>,
    {
        self.reached_state_index(word)
            .and_then(|q| self.state_color(q))
            .unwrap_or(false)
    }

    /// Returns an iterator over the states reachable from the initial state together with their
    /// minimal access words.
    fn minimal_representatives(&self) -> MinimalRepresentatives<&Self> {
        self.minimal_representatives_from(self.initial())
    }

    /// Tries to construct a shortest word that is accepted by `self`. Among all words of minimal
    /// length, the one that is least in the lexicographic order induced by the canonical order
    /// of the alphabet is returned. If the accepted language is empty, `None` is returned.
    ///
    /// # Example
    /// ```
    /// use dfa_decide::prelude::*;
    ///
    /// let dfa = DFABuilder::default()
    ///     .with_state_colors([false, false, true])
    ///     .with_edges([(0, 'b', 1), (0, 'a', 0), (1, 'a', 2)])
    ///     .into_dfa(0)
    ///     .unwrap();
    /// assert_eq!(dfa.give_word(), Some(vec!['b', 'a']));
    /// ```
    fn give_word(&self) -> Option<Vec<SymbolOf<Self>>>
    where
        Self: TransitionSystem<StateColor = bool>,
    {
        self.give_word_from(self.initial())
    }

    /// Decides whether the accepted language is empty and gives back a shortest witness if it is
    /// not, see [`Self::give_word`].
    fn emptiness(&self) -> SearchResult<SymbolOf<Self>>
    where
        Self: TransitionSystem<StateColor = bool>,
    {
        match self.give_word() {
            Some(word) => SearchResult::NonEmpty(word),
            None => SearchResult::Empty,
        }
    }

    /// Returns true if and only if the accepted language is empty.
    fn is_empty_language(&self) -> bool
    where
        Self: TransitionSystem<StateColor = bool>,
    {
        self.give_word().is_none()
    }

    /// Determines which of `self` and `other` accepts `word`. Returns `None` if either both or
    /// none of them accept it.
    fn accepted_by<O, W>(&self, other: &O, word: W) -> Option<Side>
    where
        Self: TransitionSystem<StateColor = bool>,
        O: Pointed<StateColor = bool>,
        W: FiniteWord<SymbolOf<Self>> + FiniteWord<SymbolOf<O>>,
    {
        match (self.accepts(&word), other.accepts(&word)) {
            (true, false) => Some(Side::First),
            (false, true) => Some(Side::Second),
            _ => None,
        }
    }
}

impl<Ts: Pointed> Pointed for &Ts {
    fn initial(&self) -> Self::StateIndex {
        Ts::initial(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn partial_runs_short_circuit() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, true])
            .with_edges([(0, 'a', 1)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.reached_state_index("a"), Some(1));
        assert_eq!(dfa.reached_state_index("ab"), None);
        assert_eq!(dfa.reached_state_index("ba"), None);
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn reachable_state_indices() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, false, true, true])
            .with_edges([(0, 'b', 2), (0, 'a', 1), (2, 'a', 2)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(
            dfa.reachable_state_indices_from(0).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(
            dfa.reachable_state_indices_from(3).collect::<Vec<_>>(),
            vec![3]
        );
    }

    #[test]
    fn accepted_by() {
        let first = DFABuilder::default()
            .with_state_colors([true])
            .into_dfa(0)
            .unwrap();
        let second = DFABuilder::default()
            .with_state_colors([false])
            .into_dfa(0)
            .unwrap();
        assert_eq!(first.accepted_by(&second, ""), Some(Side::First));
        assert_eq!(second.accepted_by(&first, ""), Some(Side::Second));
        assert_eq!(first.accepted_by(&first, ""), None);
    }
}
