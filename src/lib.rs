//! Decision procedures for deterministic finite automata (DFAs).
//!
//! The crate answers two classical questions about DFAs over a finite (by default two-letter)
//! alphabet. The first is whether the language of a single [`DFA`](automaton::DFA) is empty, and
//! if it is not, which shortest word it accepts. The second is whether two DFAs accept the same
//! language, and if not, which shortest word is accepted by exactly one of them.
//!
//! Both questions are answered by the same breadth-first search. It runs on anything that
//! implements [`TransitionSystem`] and [`Pointed`] and whose states are colored with `bool`.
//! Emptiness runs the search directly on a [`DFA`](automaton::DFA). Equivalence runs it on the
//! lazily computed product of two automata, where a product state is colored `true` iff exactly
//! one of its components is accepting (see [`transition_system::operations::MatchingProduct`]).
//!
//! Automata can only be created through a [`transition_system::DFABuilder`], which rejects
//! inconsistent data with a [`transition_system::ConstructionError`], or by decoding the line
//! format in [`encoding`].
//!
//! ```
//! use dfa_decide::prelude::*;
//!
//! let dfa: DFA = "q0q1f,q0aq1,q1bq1".parse().unwrap();
//! assert_eq!(dfa.emptiness(), SearchResult::NonEmpty(vec!['a']));
//!
//! let other: DFA = "q0q1fq2f,q0aq1,q1bq2,q2bq2".parse().unwrap();
//! assert!(dfa.equivalence(&other).is_equivalent());
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_decide::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, CharAlphabet, Symbol},
        automaton::{check_equivalence, EquivalenceResult, SearchResult, Side, DFA},
        encoding::ParseError,
        math,
        transition_system::{
            operations::{MapStateColor, MatchingProduct, ProductIndex},
            reachable::MinimalRepresentatives,
            Color, ConstructionError, DFABuilder, DefaultIdType, IdType, Pointed, StateIndex,
            SymbolOf, TransitionSystem,
        },
        word::{FiniteWord, KleeneStar},
        Show,
    };
}

/// Collection type aliases that are used throughout the crate.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Module that contains definitions for dealing with finite words.
pub mod word;

/// This module defines transition systems, their successor functions and combinators on them.
pub mod transition_system;
pub use transition_system::{Pointed, TransitionSystem};

/// Defines the concrete [`automaton::DFA`] type and the decision procedures for emptiness and
/// equivalence.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;

/// Reading and writing automata in the single-line textual format.
pub mod encoding;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;

use itertools::Itertools;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that should be
    /// for example q0, q1, q2, ... and for a transition (q0, a, q1) it should be (q0, a, q1).
    /// This is mainly used for debugging purposes.
    fn show(&self) -> String;
}

impl Show for u32 {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

/// A word is shown as the concatenation of its symbols in quotes, the empty word is `""`.
impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        format!("\"{}\"", self.iter().map(|x| x.show()).join(""))
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
