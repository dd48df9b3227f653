use tracing::trace;

use crate::{math::Bijection, prelude::*};

/// Generates a random [`DFA`] with `size` states over the [`CharAlphabet`] with `symbols`
/// distinct symbols. State `0` is the initial state. The algorithm is as follows:
/// 1. Create `size` states named `q0`, `q1`, ... and make each of them accepting with
///    probability `accepting`.
/// 2. For each state and each symbol, with probability `density` add a transition to a target
///    that is drawn uniformly among all states.
///
/// A `density` below `1.0` yields partial automata. Depending on the draw, some states may not
/// be reachable from the initial state.
///
/// # Panics
/// If `size` is zero or `symbols` exceeds the bounds of [`CharAlphabet::of_size`].
pub fn generate_random_dfa(
    rng: &mut fastrand::Rng,
    symbols: usize,
    size: usize,
    density: f64,
    accepting: f64,
) -> DFA {
    assert!(size > 0, "a DFA needs at least one state");
    let alphabet = CharAlphabet::of_size(symbols);

    let colors: Vec<bool> = (0..size).map(|_| rng.f64() < accepting).collect();
    let names: Bijection<DefaultIdType, String> = (0..size)
        .map(|q| (q as DefaultIdType, format!("q{q}")))
        .collect();
    let transitions: Vec<Option<DefaultIdType>> = (0..size * alphabet.size())
        .map(|_| {
            if rng.f64() < density {
                Some(rng.u32(..size as DefaultIdType))
            } else {
                None
            }
        })
        .collect();

    trace!(
        "drew random DFA with {size} states, {} transitions and {} accepting states",
        transitions.iter().flatten().count(),
        colors.iter().filter(|c| **c).count()
    );
    DFA::from_parts(alphabet, 0, colors, names, transitions)
}

/// Works as [`generate_random_dfa`], but draws from a fresh generator seeded with `seed`. The
/// result only depends on the arguments.
pub fn generate_seeded_dfa(
    seed: u64,
    symbols: usize,
    size: usize,
    density: f64,
    accepting: f64,
) -> DFA {
    generate_random_dfa(
        &mut fastrand::Rng::with_seed(seed),
        symbols,
        size,
        density,
        accepting,
    )
}
