use tracing::trace;

use crate::{math::Bijection, prelude::*};

/// A deterministic finite automaton (DFA). It accepts a finite word if reading the word from the
/// initial state never gets stuck and ends in an accepting state.
///
/// The transition function may be partial. If a state has no transition on some symbol, the
/// automaton simply has no move, which makes every run that attempts it rejecting. This is
/// different from a self-loop or an explicit rejecting sink.
///
/// States are indexed by `0..size()`. Transitions are stored in one flat table with a row of
/// `|alphabet|` optional targets per state, addressed by the position of a symbol in the
/// canonical order of the alphabet. Every state also carries a name, which is used when the
/// automaton is written in the textual format.
///
/// A `DFA` is immutable. It is created by a [`DFABuilder`] or by decoding the textual format (see
/// [`crate::encoding`]), both of which guarantee that the initial state and all accepting states
/// exist, that every transition connects existing states and that no state has two transitions
/// on the same symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct DFA<A: Alphabet = CharAlphabet> {
    alphabet: A,
    initial: DefaultIdType,
    accepting: Vec<bool>,
    names: Bijection<DefaultIdType, String>,
    transitions: Vec<Option<DefaultIdType>>,
}

impl<A: Alphabet> DFA<A> {
    pub(crate) fn from_parts(
        alphabet: A,
        initial: DefaultIdType,
        accepting: Vec<bool>,
        names: Bijection<DefaultIdType, String>,
        transitions: Vec<Option<DefaultIdType>>,
    ) -> Self {
        debug_assert_eq!(transitions.len(), accepting.len() * alphabet.size());
        Self {
            alphabet,
            initial,
            accepting,
            names,
            transitions,
        }
    }

    /// Creates a [`DFABuilder`] for automata over the given alphabet.
    pub fn builder(alphabet: A) -> DFABuilder<A> {
        DFABuilder::for_alphabet(alphabet)
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.accepting.len()
    }

    /// Returns an iterator over the indices of all states.
    pub fn state_indices(&self) -> impl Iterator<Item = DefaultIdType> {
        0..self.size() as DefaultIdType
    }

    /// Returns the indices of all states that are accepting.
    pub fn accepting_states(&self) -> impl Iterator<Item = DefaultIdType> + '_ {
        self.state_indices().filter(|q| self.accepting[*q as usize])
    }

    /// Returns true if `state` exists and is accepting.
    pub fn is_accepting(&self, state: DefaultIdType) -> bool {
        self.accepting.get(state as usize).copied().unwrap_or(false)
    }

    /// Performs a single step: returns the state reached from `state` on `symbol`, or `None` if
    /// there is no such transition. This never fails, neither for undefined transitions nor for
    /// symbols outside of the alphabet.
    pub fn step(&self, state: DefaultIdType, symbol: A::Symbol) -> Option<DefaultIdType> {
        if state as usize >= self.size() {
            return None;
        }
        let position = self.alphabet.position(symbol)?;
        self.transitions[state as usize * self.alphabet.size() + position]
    }

    /// Returns an iterator over all transitions `(source, symbol, target)`, ordered by source
    /// and then by the canonical order of the symbols.
    pub fn transitions(
        &self,
    ) -> impl Iterator<Item = (DefaultIdType, A::Symbol, DefaultIdType)> + '_ {
        self.state_indices().flat_map(move |q| {
            self.alphabet
                .universe()
                .filter_map(move |sym| self.step(q, sym).map(|p| (q, sym, p)))
        })
    }

    /// Returns the name of `state`.
    pub fn state_name(&self, state: DefaultIdType) -> Option<&str> {
        self.names.get_by_left(&state).map(|s| s.as_str())
    }

    /// Looks up a state by its name.
    pub fn state_by_name(&self, name: &str) -> Option<DefaultIdType> {
        self.names.get_by_right(name).copied()
    }

    /// Returns true if every state has a transition on every symbol.
    pub fn is_complete(&self) -> bool {
        self.transitions.iter().all(Option::is_some)
    }

    /// Returns an automaton accepting the same language in which every state has a transition
    /// on every symbol. If `self` is not complete already, a rejecting sink state with a loop on
    /// every symbol is added and all missing transitions are redirected to it. The sink is named
    /// `q{n}` for the least `n` that is at least the number of states and not taken yet.
    ///
    /// # Example
    /// ```
    /// use dfa_decide::prelude::*;
    ///
    /// let dfa: DFA = "q0q1f,q0aq1".parse().unwrap();
    /// let complete = dfa.completed();
    /// assert!(complete.is_complete());
    /// assert_eq!(complete.to_string(), "q0q1fq2,q0aq1,q0bq2,q1aq2,q1bq2,q2aq2,q2bq2");
    /// assert!(complete.equivalent(&dfa));
    /// ```
    pub fn completed(&self) -> Self {
        if self.is_complete() {
            return self.clone();
        }
        let sink = self.size() as DefaultIdType;
        let mut suffix = sink;
        while self.state_by_name(&format!("q{suffix}")).is_some() {
            suffix += 1;
        }
        let name = format!("q{suffix}");
        trace!("completing automaton with sink {name}");

        let mut names = self.names.clone();
        names.insert(sink, name);
        let mut accepting = self.accepting.clone();
        accepting.push(false);
        let transitions = self
            .transitions
            .iter()
            .copied()
            .chain(std::iter::repeat(None).take(self.alphabet.size()))
            .map(|target| target.or(Some(sink)))
            .collect();

        Self::from_parts(
            self.alphabet.clone(),
            self.initial,
            accepting,
            names,
            transitions,
        )
    }
}

impl<A: Alphabet> TransitionSystem for DFA<A> {
    type Alphabet = A;
    type StateIndex = DefaultIdType;
    type StateColor = bool;

    fn alphabet(&self) -> &Self::Alphabet {
        &self.alphabet
    }

    fn successor_index(
        &self,
        state: Self::StateIndex,
        symbol: SymbolOf<Self>,
    ) -> Option<Self::StateIndex> {
        self.step(state, symbol)
    }

    fn state_color(&self, state: Self::StateIndex) -> Option<Self::StateColor> {
        self.accepting.get(state as usize).copied()
    }
}

impl<A: Alphabet> Pointed for DFA<A> {
    fn initial(&self) -> Self::StateIndex {
        self.initial
    }
}

impl<A: Alphabet> std::fmt::Debug for DFA<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = |q: DefaultIdType| self.state_name(q).unwrap_or("?").to_string();
        writeln!(f, "DFA over {:?}", self.alphabet)?;
        writeln!(f, "start: {}", name(self.initial))?;
        writeln!(
            f,
            "accepting: [{}]",
            itertools::Itertools::join(&mut self.accepting_states().map(name), ", ")
        )?;
        for (q, sym, p) in self.transitions() {
            writeln!(f, "  {} --{}--> {}", name(q), sym.show(), name(p))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn partial() -> DFA {
        DFABuilder::default()
            .with_state_colors([true, false])
            .with_edges([(0, 'a', 1), (1, 'a', 0)])
            .into_dfa(0)
            .unwrap()
    }

    #[test]
    fn step_is_total_over_valid_states() {
        let dfa = partial();
        assert_eq!(dfa.step(0, 'a'), Some(1));
        assert_eq!(dfa.step(0, 'b'), None);
        assert_eq!(dfa.step(1, 'b'), None);
        assert_eq!(dfa.step(0, 'z'), None);
        assert_eq!(dfa.step(7, 'a'), None);
    }

    #[test]
    fn run() {
        let dfa = partial();
        assert!(dfa.accepts(""));
        assert!(dfa.accepts("aa"));
        assert!(!dfa.accepts("a"));
        assert!(!dfa.accepts("aab"));
        // rejected as soon as a symbol has no move, even if the prefix returns to q0 later
        assert!(!dfa.accepts("ba"));
        assert!(dfa.accepts(vec!['a', 'a', 'a', 'a']));
    }

    #[test]
    fn completion_adds_a_fresh_sink() {
        let mut builder = DFABuilder::default();
        let start = builder.add_named_state("q1", false);
        let end = builder.add_named_state("q2", true);
        builder.add_edge(start, 'b', end);
        let dfa = builder.into_dfa(start).unwrap();
        assert!(!dfa.is_complete());

        let complete = dfa.completed();
        assert!(complete.is_complete());
        assert_eq!(complete.size(), 3);
        assert_eq!(complete.state_name(2), Some("q3"));
        assert_eq!(complete.step(0, 'a'), Some(2));
        assert_eq!(complete.step(2, 'b'), Some(2));
        assert!(complete.accepts("b"));
        assert!(!complete.accepts("ba"));
        assert_eq!(complete.completed(), complete);
    }

    #[test]
    fn accessors() {
        let dfa = partial();
        assert_eq!(dfa.size(), 2);
        assert_eq!(dfa.accepting_states().collect::<Vec<_>>(), vec![0]);
        assert!(dfa.is_accepting(0));
        assert!(!dfa.is_accepting(1));
        assert!(!dfa.is_accepting(2));
        assert_eq!(
            dfa.transitions().collect::<Vec<_>>(),
            vec![(0, 'a', 1), (1, 'a', 0)]
        );
        assert_eq!(
            format!("{dfa:?}"),
            "DFA over CharAlphabet(['a', 'b'])\nstart: q0\naccepting: [q0]\n  q0 --a--> q1\n  q1 --a--> q0\n"
        );
    }
}
