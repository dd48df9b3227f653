use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    automaton::DFA,
    math::{Bijection, Map},
    prelude::*,
};

/// Abstracts the ways in which the data handed to a [`DFABuilder`] can violate the invariants
/// of a [`DFA`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConstructionError {
    /// The designated initial state is not among the states.
    #[error("initial state {0} does not exist")]
    UnknownInitial(DefaultIdType),
    /// A state that is marked as accepting is not among the states.
    #[error("accepting state {0} does not exist")]
    UnknownAccepting(DefaultIdType),
    /// The source or target of a transition is not among the states.
    #[error("transition refers to state {0} which does not exist")]
    UnknownState(DefaultIdType),
    /// A transition is labeled with a symbol that is not part of the alphabet.
    #[error("symbol `{0}` is not part of the alphabet")]
    UnknownSymbol(String),
    /// Two states were given the same name.
    #[error("state name `{0}` is used more than once")]
    DuplicateState(String),
    /// There are two transitions with different targets for the same state and symbol.
    #[error("state `{state}` has conflicting transitions on `{symbol}` to `{first}` and `{second}`")]
    Nondeterministic {
        /// Name of the source state.
        state: String,
        /// The symbol on which the transitions conflict.
        symbol: String,
        /// Name of the target of the transition that was given first.
        first: String,
        /// Name of the target of the conflicting transition.
        second: String,
    },
}

/// Helper struct for the construction of a [`DFA`]. It stores a list of named states, a list of
/// accepting states and a list of edges. Nothing is checked until [`DFABuilder::into_dfa`] is
/// called, which validates everything at once and either produces an immutable [`DFA`] or a
/// [`ConstructionError`].
///
/// States are numbered in the order in which they are added, starting at `0`. Unless a name is
/// given explicitly, state `i` is named `q{i}`.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `{a, b}` that accepts
/// precisely the words with an odd number of `b`s.
/// ```
/// use dfa_decide::prelude::*;
///
/// let dfa = DFABuilder::default()
///     .with_state_colors([false, true]) // colors given in the order of the states
///     .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 0)])
///     .into_dfa(0) // 0 is the initial state
///     .unwrap();
/// assert!(dfa.accepts("babb"));
/// assert!(!dfa.accepts("bab"));
/// assert!(!dfa.accepts("bb"));
///
/// let conflicting = DFABuilder::default()
///     .with_state_colors([false, true])
///     .with_edges([(0, 'a', 0), (0, 'a', 1)])
///     .into_dfa(0);
/// assert!(matches!(conflicting, Err(ConstructionError::Nondeterministic { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct DFABuilder<A: Alphabet = CharAlphabet> {
    alphabet: A,
    names: Vec<String>,
    accepting: Vec<DefaultIdType>,
    edges: Vec<(DefaultIdType, A::Symbol, DefaultIdType)>,
}

impl Default for DFABuilder<CharAlphabet> {
    fn default() -> Self {
        Self::for_alphabet(CharAlphabet::default())
    }
}

impl<A: Alphabet> DFABuilder<A> {
    /// Creates an empty builder for automata over the given alphabet.
    pub fn for_alphabet(alphabet: A) -> Self {
        Self {
            alphabet,
            names: vec![],
            accepting: vec![],
            edges: vec![],
        }
    }

    /// Returns the number of states added so far.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Adds a state with the given name, marking it as accepting if `accepting` is true, and
    /// returns its index.
    pub fn add_named_state<S: Into<String>>(&mut self, name: S, accepting: bool) -> DefaultIdType {
        let id = self.names.len() as DefaultIdType;
        self.names.push(name.into());
        if accepting {
            self.accepting.push(id);
        }
        id
    }

    /// Adds a state named `q{i}`, where `i` is its index, and returns that index.
    pub fn add_state(&mut self, accepting: bool) -> DefaultIdType {
        let name = format!("q{}", self.names.len());
        self.add_named_state(name, accepting)
    }

    /// Records a transition from `source` on `symbol` to `target`.
    pub fn add_edge(&mut self, source: DefaultIdType, symbol: A::Symbol, target: DefaultIdType) {
        self.edges.push((source, symbol, target));
    }

    /// Adds one state per given color, where a state is accepting iff its color is `true`.
    pub fn with_state_colors<I: IntoIterator<Item = bool>>(mut self, iter: I) -> Self {
        for accepting in iter {
            self.add_state(accepting);
        }
        self
    }

    /// Marks the states with the given indices as accepting.
    pub fn with_accepting<I: IntoIterator<Item = DefaultIdType>>(mut self, iter: I) -> Self {
        self.accepting.extend(iter);
        self
    }

    /// Adds a list of edges, each given as a triple `(source, symbol, target)`.
    pub fn with_edges<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (DefaultIdType, A::Symbol, DefaultIdType)>,
    {
        self.edges.extend(iter);
        self
    }

    fn name(&self, state: DefaultIdType) -> String {
        self.names[state as usize].clone()
    }

    /// Validates the collected data and builds a [`DFA`] with the given initial state. The
    /// transition table may be partial. Giving the same transition twice is fine, but giving two
    /// transitions with different targets for the same state and symbol is an error.
    pub fn into_dfa(self, initial: DefaultIdType) -> Result<DFA<A>, ConstructionError> {
        let size = self.names.len();
        if initial as usize >= size {
            return Err(ConstructionError::UnknownInitial(initial));
        }

        let mut names = Bijection::new();
        for (id, name) in self.names.iter().enumerate() {
            if names.contains_right(name) {
                return Err(ConstructionError::DuplicateState(name.clone()));
            }
            names.insert(id as DefaultIdType, name.clone());
        }

        let mut accepting = vec![false; size];
        for &q in &self.accepting {
            *accepting
                .get_mut(q as usize)
                .ok_or(ConstructionError::UnknownAccepting(q))? = true;
        }

        let stride = self.alphabet.size();
        let mut transitions: Vec<Option<DefaultIdType>> = vec![None; size * stride];
        let mut given: Map<(DefaultIdType, usize), DefaultIdType> = Map::default();
        for &(source, symbol, target) in &self.edges {
            for q in [source, target] {
                if q as usize >= size {
                    return Err(ConstructionError::UnknownState(q));
                }
            }
            let position = self
                .alphabet
                .position(symbol)
                .ok_or_else(|| ConstructionError::UnknownSymbol(symbol.show()))?;

            if let Some(&existing) = given.get(&(source, position)) {
                if existing != target {
                    return Err(ConstructionError::Nondeterministic {
                        state: self.name(source),
                        symbol: symbol.show(),
                        first: self.name(existing),
                        second: self.name(target),
                    });
                }
                trace!(
                    "ignoring repeated transition {} --{}--> {}",
                    self.name(source),
                    symbol.show(),
                    self.name(target)
                );
                continue;
            }
            given.insert((source, position), target);
            transitions[source as usize * stride + position] = Some(target);
        }

        debug!(
            "built DFA with {size} states and {} transitions over {} symbols",
            given.len(),
            stride
        );
        Ok(DFA::from_parts(
            self.alphabet,
            initial,
            accepting,
            names,
            transitions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn rejects_inconsistent_data() {
        assert_eq!(
            DFABuilder::default().into_dfa(0),
            Err(ConstructionError::UnknownInitial(0))
        );
        assert_eq!(
            DFABuilder::default()
                .with_state_colors([false])
                .into_dfa(1),
            Err(ConstructionError::UnknownInitial(1))
        );
        assert_eq!(
            DFABuilder::default()
                .with_state_colors([false])
                .with_accepting([3])
                .into_dfa(0),
            Err(ConstructionError::UnknownAccepting(3))
        );
        assert_eq!(
            DFABuilder::default()
                .with_state_colors([false])
                .with_edges([(0, 'a', 2)])
                .into_dfa(0),
            Err(ConstructionError::UnknownState(2))
        );
        assert_eq!(
            DFABuilder::default()
                .with_state_colors([false])
                .with_edges([(0, 'c', 0)])
                .into_dfa(0),
            Err(ConstructionError::UnknownSymbol("c".into()))
        );
    }

    #[test]
    fn rejects_nondeterminism_but_not_repetition() {
        let err = DFABuilder::default()
            .with_state_colors([false, true])
            .with_edges([(0, 'b', 1), (0, 'b', 0)])
            .into_dfa(0)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "state `q0` has conflicting transitions on `b` to `q1` and `q0`"
        );

        let dfa = DFABuilder::default()
            .with_state_colors([false, true])
            .with_edges([(0, 'b', 1), (0, 'b', 1)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.successor_index(0, 'b'), Some(1));
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut builder = DFABuilder::default();
        builder.add_named_state("p", false);
        builder.add_named_state("p", true);
        assert_eq!(
            builder.into_dfa(0),
            Err(ConstructionError::DuplicateState("p".into()))
        );
    }

    #[test]
    fn odd_number_of_bs() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, true])
            .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 0)])
            .into_dfa(0)
            .unwrap();
        assert!(dfa.accepts("b"));
        assert!(dfa.accepts("babb"));
        assert!(!dfa.accepts("bab"));
        assert!(!dfa.accepts(""));
        assert_eq!(dfa.give_word(), Some(vec!['b']));
    }

    #[test]
    fn named_states() {
        let mut builder = DFABuilder::default();
        let start = builder.add_named_state("start", false);
        let end = builder.add_named_state("end", true);
        builder.add_edge(start, 'a', end);
        assert_eq!(builder.size(), 2);
        let dfa = builder.into_dfa(start).unwrap();
        assert_eq!(dfa.state_name(end), Some("end"));
        assert_eq!(dfa.state_by_name("start"), Some(start));
        assert!(dfa.accepts("a"));
    }
}
