//! The single-line textual format for automata over a [`CharAlphabet`](crate::alphabet::CharAlphabet).
//!
//! A line consists of comma separated fields. The first field lists the states, each as `q`
//! followed by digits and optionally by `f` if the state is accepting. The first state listed
//! is the initial state. Every other field is a transition `q<digits><symbol>q<digits>`. For
//! example `q0fq1,q0aq1,q1bq0` has the accepting initial state `q0`, a transition from `q0` to
//! `q1` on `a` and one back on `b`.
//!
//! Decoding lives in [`input`], encoding is the [`Display`](std::fmt::Display) implementation
//! of [`DFA`](crate::automaton::DFA) in [`output`].

/// Decoding of the line format.
pub mod input;
pub use input::ParseError;

/// Encoding into the line format.
pub mod output;
