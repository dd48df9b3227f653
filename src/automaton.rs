mod dfa;
pub use dfa::DFA;

/// Decides emptiness of the accepted language, see [`crate::Pointed::emptiness`].
mod emptiness;
pub use emptiness::SearchResult;

/// Decides language equivalence of two automata through their symmetric difference.
mod equivalence;
pub use equivalence::{
    check_equivalence, symmetric_difference, EquivalenceResult, Side, SymmetricDifference,
};
