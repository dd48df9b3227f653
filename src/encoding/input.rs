use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{math::Map, prelude::*};

/// The ways in which a line can fail to describe a [`DFA`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The line contains nothing but whitespace.
    #[error("empty automaton description")]
    Empty,
    /// The state section contains something that is not a state token `q<digits>[f]`. Holds
    /// the part of the section starting at the offending position.
    #[error("malformed state section at `{0}`")]
    MalformedState(String),
    /// The same state is declared twice in the state section.
    #[error("state `{0}` is declared more than once")]
    DuplicateState(String),
    /// A transition field does not have the shape `q<digits><symbol>q<digits>`.
    #[error("malformed transition `{0}`")]
    MalformedTransition(String),
    /// A transition mentions a state that is not declared in the state section.
    #[error("transition `{transition}` refers to undeclared state `{state}`")]
    UnknownState {
        /// The offending transition field.
        transition: String,
        /// The undeclared state.
        state: String,
    },
    /// A transition is labeled with a symbol that is not part of the alphabet.
    #[error("transition `{transition}` uses symbol `{symbol}` which is not in the alphabet")]
    UnknownSymbol {
        /// The offending transition field.
        transition: String,
        /// The symbol that is not in the alphabet.
        symbol: char,
    },
    /// The decoded data is inconsistent, for example because a state has two transitions with
    /// different targets on the same symbol.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Splits a leading state token `q<digits>` off `input` and returns it together with the rest.
fn state_token(input: &str) -> Option<(&str, &str)> {
    let digits = input.strip_prefix('q')?;
    let len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if len == 0 {
        return None;
    }
    Some(input.split_at(len + 1))
}

fn parse_states(section: &str) -> Result<Vec<(&str, bool)>, ParseError> {
    let mut states: Vec<(&str, bool)> = vec![];
    let mut rest = section;
    while !rest.is_empty() {
        let (name, after) =
            state_token(rest).ok_or_else(|| ParseError::MalformedState(rest.to_string()))?;
        if states.iter().any(|(existing, _)| *existing == name) {
            return Err(ParseError::DuplicateState(name.to_string()));
        }
        let (accepting, after) = match after.strip_prefix('f') {
            Some(after) => (true, after),
            None => (false, after),
        };
        trace!("read state {name}, accepting: {accepting}");
        states.push((name, accepting));
        rest = after;
    }
    if states.is_empty() {
        return Err(ParseError::MalformedState(section.to_string()));
    }
    Ok(states)
}

fn parse_transition<'a>(
    field: &'a str,
    alphabet: &CharAlphabet,
    ids: &Map<&str, DefaultIdType>,
) -> Result<(DefaultIdType, char, DefaultIdType), ParseError> {
    let malformed = || ParseError::MalformedTransition(field.to_string());
    let lookup = |state: &'a str| {
        ids.get(state).copied().ok_or_else(|| ParseError::UnknownState {
            transition: field.to_string(),
            state: state.to_string(),
        })
    };

    let (source, rest) = state_token(field).ok_or_else(malformed)?;
    let source = lookup(source)?;

    let mut chars = rest.chars();
    let symbol = chars.next().ok_or_else(malformed)?;
    if !alphabet.contains(symbol) {
        return Err(ParseError::UnknownSymbol {
            transition: field.to_string(),
            symbol,
        });
    }

    let (target, trailing) = state_token(chars.as_str()).ok_or_else(malformed)?;
    if !trailing.is_empty() {
        return Err(malformed());
    }
    let target = lookup(target)?;

    Ok((source, symbol, target))
}

impl DFA<CharAlphabet> {
    /// Decodes a [`DFA`] over the default alphabet `{a, b}` from a single line, see
    /// [`crate::encoding`] for the format.
    ///
    /// # Example
    /// ```
    /// use dfa_decide::prelude::*;
    ///
    /// let dfa = DFA::from_line("q0fq1q2fq3,q0aq1,q0bq0,q1aq2,q1bq3,q2aq2,q2bq3,q3aq0,q3bq2").unwrap();
    /// assert_eq!(dfa.size(), 4);
    /// assert!(dfa.accepts("aa"));
    ///
    /// assert_eq!(DFA::from_line("  "), Err(ParseError::Empty));
    /// assert!(matches!(DFA::from_line("q0,q0cq0"), Err(ParseError::UnknownSymbol { symbol: 'c', .. })));
    /// ```
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        Self::from_line_with_alphabet(line, CharAlphabet::default())
    }

    /// Decodes a [`DFA`] over the given alphabet from a single line. Whitespace around the line
    /// and around each field is ignored, as are empty transition fields. A transition that is
    /// given twice is accepted, two transitions with different targets for the same state and
    /// symbol are not.
    ///
    /// State numbers are read greedily, so digits cannot be used as symbols.
    pub fn from_line_with_alphabet(line: &str, alphabet: CharAlphabet) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut fields = line.split(',').map(str::trim);
        let states = parse_states(fields.next().unwrap_or_default())?;

        let mut builder = DFABuilder::for_alphabet(alphabet.clone());
        let mut ids: Map<&str, DefaultIdType> = Map::default();
        for &(name, accepting) in &states {
            ids.insert(name, builder.add_named_state(name, accepting));
        }

        for field in fields.filter(|field| !field.is_empty()) {
            let (source, symbol, target) = parse_transition(field, &alphabet, &ids)?;
            builder.add_edge(source, symbol, target);
        }

        debug!(
            "decoded automaton with {} states over {alphabet} from line of length {}",
            states.len(),
            line.len()
        );
        Ok(builder.into_dfa(0)?)
    }
}

impl FromStr for DFA<CharAlphabet> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}
