use std::collections::VecDeque;

use tracing::trace;

use crate::{math::Map, prelude::*};

/// Struct that can return the minimal representatives of a transition system. A minimal representative
/// for a state `q` of some transition system is the length-lexicographically minimal string with which
/// `q` can be reached from a given state.
///
/// This is a breadth-first search. The frontier is a FIFO queue of states and the visited set is
/// keyed by state only, so every state is enqueued at most once, namely when it is discovered for
/// the first time. Successors are explored in the canonical order of the alphabet. Consequently
/// states are yielded in the length-lexicographic order of their minimal representatives. Instead
/// of storing a word per queued state, every discovered state remembers its parent and the symbol
/// on which it was reached, and [`Self::access_word`] retraces these pointers.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<Ts: TransitionSystem> {
    ts: Ts,
    origin: Ts::StateIndex,
    parents: Map<Ts::StateIndex, Option<(Ts::StateIndex, SymbolOf<Ts>)>>,
    queue: VecDeque<Ts::StateIndex>,
}

impl<Ts> MinimalRepresentatives<Ts>
where
    Ts: TransitionSystem,
{
    /// Starts a search from `origin`, which is considered to be reached by the empty word.
    pub fn new(ts: Ts, origin: Ts::StateIndex) -> Self {
        let parents = Map::from_iter([(origin, None)]);
        let queue = VecDeque::from([origin]);
        Self {
            ts,
            origin,
            parents,
            queue,
        }
    }

    /// Returns the number of states that have been discovered so far.
    pub fn seen(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if `state` has been discovered already.
    pub fn has_seen(&self, state: Ts::StateIndex) -> bool {
        self.parents.contains_key(&state)
    }

    /// Retraces the parent pointers from `state` back to the origin and returns the minimal
    /// representative of `state`. Panics if `state` has not been discovered yet.
    pub fn access_word(&self, state: Ts::StateIndex) -> Vec<SymbolOf<Ts>> {
        let mut word = vec![];
        let mut current = state;
        while let Some((parent, symbol)) = self.parents[&current] {
            word.push(symbol);
            current = parent;
        }
        debug_assert_eq!(current, self.origin);
        word.reverse();
        word
    }
}

impl<Ts> Iterator for MinimalRepresentatives<Ts>
where
    Ts: TransitionSystem,
{
    type Item = Ts::StateIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let q = self.queue.pop_front()?;
        trace!("visiting state {}", q.show());
        for symbol in self.ts.alphabet().universe() {
            if let Some(p) = self.ts.successor_index(q, symbol) {
                if !self.parents.contains_key(&p) {
                    self.parents.insert(p, Some((q, symbol)));
                    self.queue.push_back(p);
                }
            }
        }
        Some(q)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn reachable_states() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, false, true])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 0),
                (1, 'a', 2),
                (1, 'b', 0),
                (2, 'a', 2),
                (2, 'b', 2),
            ])
            .into_dfa(0)
            .unwrap();

        let mut reps = dfa.minimal_representatives_from(0);
        let order = reps.by_ref().collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(reps.access_word(0), vec![]);
        assert_eq!(reps.access_word(1), vec!['a']);
        assert_eq!(reps.access_word(2), vec!['a', 'a']);

        assert_eq!(
            dfa.minimal_representatives_from(2).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn each_state_is_visited_once_on_cycles() {
        // a complete graph on three states, every state reachable by many paths
        let dfa = DFABuilder::default()
            .with_state_colors([false, false, false])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 2),
                (1, 'b', 0),
                (2, 'a', 0),
                (2, 'b', 1),
            ])
            .into_dfa(0)
            .unwrap();
        let mut reps = dfa.minimal_representatives();
        assert_eq!(reps.by_ref().count(), 3);
        assert_eq!(reps.seen(), 3);
        assert_eq!(reps.access_word(2), vec!['b']);
        assert!(reps.has_seen(1));
    }

    #[test_log::test]
    fn ties_are_broken_by_alphabet_order() {
        let dfa = DFABuilder::for_alphabet(CharAlphabet::from_iter("ba".chars()))
            .with_state_colors([false, false, false, true])
            .with_edges([(0, 'a', 1), (0, 'b', 2), (1, 'a', 3), (2, 'a', 3)])
            .into_dfa(0)
            .unwrap();
        let mut reps = dfa.minimal_representatives();
        assert_eq!(reps.by_ref().collect::<Vec<_>>(), vec![0, 2, 1, 3]);
        assert_eq!(reps.access_word(3), vec!['b', 'a']);
    }
}
