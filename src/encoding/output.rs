use std::fmt::{Display, Formatter, Result, Write};

use crate::prelude::*;

impl DFA<CharAlphabet> {
    fn write_state<W: Write>(&self, w: &mut W, state: DefaultIdType) -> Result {
        w.write_str(self.state_name(state).unwrap_or_default())?;
        if self.is_accepting(state) {
            w.write_char('f')?;
        }
        Ok(())
    }
}

/// Writes the automaton in the line format of [`crate::encoding`]. The initial state is listed
/// first, the remaining states follow in the order of their indices. Transitions are listed by
/// source state and then by the canonical order of the symbols.
///
/// The result can only be decoded again if all state names have the form `q<digits>`, which is
/// the case for automata that were decoded or built without explicit names.
impl Display for DFA<CharAlphabet> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.write_state(f, self.initial())?;
        for state in self.state_indices().filter(|q| *q != self.initial()) {
            self.write_state(f, state)?;
        }
        for (source, symbol, target) in self.transitions() {
            let name = |q| self.state_name(q).unwrap_or_default();
            write!(f, ",{}{}{}", name(source), symbol, name(target))?;
        }
        Ok(())
    }
}
