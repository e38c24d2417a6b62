//! Thompson construction for [`Rx`], implemented against
//! `rex_automata`'s generic [`Compile`] trait (see the table in the core
//! design notes: `Concat`/`Choice`/`Star` graft epsilon edges around their
//! sub-terms' state pairs; `Repeat` unfolds recursively by peeling one
//! iteration off `lo`/`hi` at a time).

use crate::ast::Rx;
use rex_automata::builder::{Compile, NfaBuilder};
use rex_automata::{BuildError, LetterSet};

impl Compile for Rx {
    fn compile_into(&self, b: &mut NfaBuilder) -> Result<(usize, usize), BuildError> {
        match self {
            Rx::Phi => Ok((b.new_state(), b.new_state())),
            Rx::Empty => {
                let s = b.new_state();
                Ok((s, s))
            }
            Rx::Letter(c) => {
                let s = b.new_state();
                let a = b.new_state();
                b.add_letters(s, a, LetterSet::single(*c));
                Ok((s, a))
            }
            Rx::Letters(set) => {
                let s = b.new_state();
                let a = b.new_state();
                b.add_letters(s, a, set.clone());
                Ok((s, a))
            }
            Rx::Concat(x, y) => {
                let (s1, a1) = x.compile_into(b)?;
                let (s2, a2) = y.compile_into(b)?;
                b.add_epsilon(a1, s2);
                Ok((s1, a2))
            }
            Rx::Choice(x, y) => {
                let s = b.new_state();
                let a = b.new_state();
                let (s1, a1) = x.compile_into(b)?;
                let (s2, a2) = y.compile_into(b)?;
                b.add_epsilon(s, s1);
                b.add_epsilon(s, s2);
                b.add_epsilon(a1, a);
                b.add_epsilon(a2, a);
                Ok((s, a))
            }
            Rx::Star(x) => {
                let s = b.new_state();
                let a = b.new_state();
                let (s1, a1) = x.compile_into(b)?;
                b.add_epsilon(s, a);
                b.add_epsilon(s, s1);
                b.add_epsilon(a1, s);
                Ok((s, a))
            }
            Rx::Repeat(x, lo, hi) => compile_repeat(x, *lo, *hi, b),
            Rx::Var(_) => Err(BuildError::UnsupportedVar),
        }
    }
}

/// Unfolds `r{lo,hi}` one iteration at a time, per the construction table:
/// `lo > 0` peels a mandatory `Concat`; `lo == 0, hi > 0` peels an optional
/// `Choice(Empty, ...)`; `lo == 0, hi == 0` is `Empty`; `hi = None`
/// (unbounded) behaves like `Star` once `lo` reaches zero.
fn compile_repeat(r: &Rx, lo: u32, hi: Option<u32>, b: &mut NfaBuilder) -> Result<(usize, usize), BuildError> {
    match hi {
        Some(0) => {
            let s = b.new_state();
            Ok((s, s))
        }
        None if lo == 0 => {
            let s = b.new_state();
            let a = b.new_state();
            let (s1, a1) = r.compile_into(b)?;
            b.add_epsilon(s, a);
            b.add_epsilon(s, s1);
            b.add_epsilon(a1, s);
            Ok((s, a))
        }
        None => {
            let (s1, a1) = r.compile_into(b)?;
            let (s2, a2) = compile_repeat(r, lo - 1, None, b)?;
            b.add_epsilon(a1, s2);
            Ok((s1, a2))
        }
        Some(h) if lo > 0 => {
            let (s1, a1) = r.compile_into(b)?;
            let (s2, a2) = compile_repeat(r, lo - 1, Some(h - 1), b)?;
            b.add_epsilon(a1, s2);
            Ok((s1, a2))
        }
        Some(h) => {
            let s = b.new_state();
            let a = b.new_state();
            let (s1, a1) = r.compile_into(b)?;
            let (s2, a2) = compile_repeat(r, 0, Some(h - 1), b)?;
            b.add_epsilon(s, a);
            b.add_epsilon(s, s1);
            b.add_epsilon(a1, s2);
            b.add_epsilon(a2, a);
            Ok((s, a))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rex_automata::builder::compile;

    #[test]
    fn repeat_zero_zero_is_empty_language_acceptance() {
        let rx = Rx::repeat(Rx::letter(b'a' as u16), 0, Some(0));
        let nfa = compile(&rx).unwrap();
        assert!(nfa.accepts(""));
        assert!(nfa.rejects("a"));
    }

    #[test]
    fn bounded_repeat_accepts_within_range_only() {
        let rx = Rx::repeat(Rx::letter(b'a' as u16), 2, Some(3));
        let nfa = compile(&rx).unwrap();
        assert!(nfa.rejects("a"));
        assert!(nfa.accepts("aa"));
        assert!(nfa.accepts("aaa"));
        assert!(nfa.rejects("aaaa"));
    }

    #[test]
    fn unbounded_repeat_with_minimum() {
        let rx = Rx::repeat(Rx::letter(b'a' as u16), 2, None);
        let nfa = compile(&rx).unwrap();
        assert!(nfa.rejects("a"));
        assert!(nfa.accepts("aa"));
        assert!(nfa.accepts("aaaaaaaa"));
    }

    #[test]
    fn var_node_is_rejected() {
        let rx = Rx::var(0);
        assert!(matches!(compile(&rx), Err(BuildError::UnsupportedVar)));
    }
}
