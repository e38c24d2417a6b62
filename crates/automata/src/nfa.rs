//! The compiled, executable automaton and its simultaneous-state simulation.

use crate::bitset::BitSet;
use crate::lettermap::LetterMap;

/// A compiled nondeterministic finite automaton whose epsilon edges have
/// already been folded into the transition table, so that simulation never
/// needs to chase them.
#[derive(Debug, Clone)]
pub struct Nfa {
    size: usize,
    start: BitSet,
    accept: BitSet,
    edges: LetterMap<Vec<Option<BitSet>>>,
}

impl Nfa {
    pub(crate) fn from_parts(
        size: usize,
        start: BitSet,
        accept: BitSet,
        edges: LetterMap<Vec<Option<BitSet>>>,
    ) -> Self {
        Nfa { size, start, accept, edges }
    }

    /// Number of states.
    pub fn states(&self) -> usize {
        self.size
    }

    /// Runs the simultaneous-state simulation described for `Nfa` execution:
    /// track the set of currently active states as a bitset, and for each
    /// 16-bit code unit of `input` move every active state along its
    /// (already epsilon-closed) transitions.
    pub fn accepts(&self, input: &str) -> bool {
        let mut active = self.start.clone();
        for unit in input.encode_utf16() {
            let Some(row) = self.edges.get(unit) else {
                return false;
            };
            let mut next = BitSet::with_size(self.size);
            let mut moved = false;
            for state in active.iter() {
                if let Some(targets) = &row[state] {
                    next.union_with(targets);
                    moved = true;
                }
            }
            if !moved {
                return false;
            }
            active = next;
        }
        active.intersects(&self.accept)
    }

    pub fn rejects(&self, input: &str) -> bool {
        !self.accepts(input)
    }
}
