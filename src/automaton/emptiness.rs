/// The outcome of an emptiness check. Either no word is accepted, or a shortest accepted word is
/// given as a witness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchResult<S> {
    /// The accepted language is empty.
    Empty,
    /// The accepted language contains the given word, and no shorter one.
    NonEmpty(Vec<S>),
}

impl<S> SearchResult<S> {
    /// Returns true if the language is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResult::Empty)
    }

    /// Returns the witness, if there is one.
    pub fn witness(&self) -> Option<&[S]> {
        match self {
            SearchResult::Empty => None,
            SearchResult::NonEmpty(word) => Some(word),
        }
    }

    /// Consumes `self` and returns the witness, if there is one.
    pub fn into_witness(self) -> Option<Vec<S>> {
        match self {
            SearchResult::Empty => None,
            SearchResult::NonEmpty(word) => Some(word),
        }
    }
}

impl<S> From<Option<Vec<S>>> for SearchResult<S> {
    fn from(value: Option<Vec<S>>) -> Self {
        match value {
            Some(word) => SearchResult::NonEmpty(word),
            None => SearchResult::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn accepting_initial_state() {
        let dfa = DFABuilder::default()
            .with_state_colors([true, false])
            .with_edges([(0, 'a', 1), (1, 'a', 0)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.emptiness(), SearchResult::NonEmpty(vec![]));
        assert!(!dfa.is_empty_language());
    }

    #[test]
    fn single_step() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, true])
            .with_edges([(0, 'a', 1)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.emptiness(), SearchResult::NonEmpty(vec!['a']));
    }

    #[test]
    fn lone_rejecting_state() {
        let dfa = DFABuilder::default()
            .with_state_colors([false])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.emptiness(), SearchResult::Empty);
        assert!(dfa.is_empty_language());
        assert_eq!(dfa.emptiness().witness(), None);
    }

    #[test]
    fn unreachable_accepting_state() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, false, true])
            .with_edges([(0, 'a', 1), (1, 'b', 0), (2, 'a', 0)])
            .into_dfa(0)
            .unwrap();
        assert!(dfa.is_empty_language());
    }

    #[test]
    fn witness_is_shortest_on_cycles() {
        // 0 -a-> 1 -a-> 2 -a-> 3 (accepting) and a shortcut 0 -b-> 3
        let dfa = DFABuilder::default()
            .with_state_colors([false, false, false, true])
            .with_edges([
                (0, 'a', 1),
                (1, 'a', 2),
                (2, 'a', 3),
                (2, 'b', 0),
                (1, 'b', 1),
                (0, 'b', 3),
            ])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.emptiness(), SearchResult::NonEmpty(vec!['b']));
    }

    #[cfg(feature = "random")]
    #[test_log::test]
    fn random_automata_agree_with_brute_force() {
        use crate::random::generate_random_dfa;

        let mut rng = fastrand::Rng::with_seed(0xdfa);
        for _ in 0..200 {
            let size = rng.usize(1..8);
            let dfa = generate_random_dfa(&mut rng, 2, size, 0.7, 0.2);
            let brute_force = KleeneStar::new(vec!['a', 'b'])
                .take_while(|w| w.len() <= dfa.size())
                .find(|w| dfa.accepts(w));

            let result = dfa.emptiness();
            match (&result, brute_force) {
                (SearchResult::Empty, None) => {}
                (SearchResult::NonEmpty(witness), Some(shortest)) => {
                    assert!(dfa.accepts(witness));
                    // the enumeration is length-lexicographic, so the first hit is what the
                    // search must produce as well
                    assert_eq!(witness, &shortest, "{dfa:?}");
                }
                (result, brute_force) => panic!("{dfa:?} {result:?} vs {brute_force:?}"),
            }
            assert_eq!(dfa.emptiness(), result);
        }
    }
}
