//! Thompson construction: growing an [`Nfa`] from a regex term.
//!
//! This crate owns the graph primitives (fresh states, epsilon edges,
//! labeled edges, epsilon closure, folding into the executable form) and
//! knows nothing about any concrete term language. A term language
//! implements [`Compile`] against these primitives — `rex-syntax`'s `Rx` is
//! the only implementor in this workspace, but the split keeps the
//! automaton machinery reusable.

use crate::bitset::BitSet;
use crate::error::BuildError;
use crate::lettermap::LetterMap;
use crate::letterset::LetterSet;
use crate::nfa::Nfa;

/// Implemented by term types that can grow themselves into an
/// [`NfaBuilder`]'s state graph, returning their own `(start, accept)`
/// state pair.
pub trait Compile {
    fn compile_into(&self, builder: &mut NfaBuilder) -> Result<(usize, usize), BuildError>;
}

/// Compiles any [`Compile`] term into an executable [`Nfa`].
pub fn compile<T: Compile>(term: &T) -> Result<Nfa, BuildError> {
    let mut builder = NfaBuilder::new();
    let (start, accept) = term.compile_into(&mut builder)?;
    builder.start = Some(start);
    builder.accept = Some(accept);
    log::trace!(
        "thompson construction: {} states, {} epsilon edges",
        builder.states,
        builder.epsilon.iter().map(Vec::len).sum::<usize>()
    );
    Ok(builder.into_nfa())
}

/// Mutable intermediate form built up during Thompson construction: a plain
/// adjacency graph of states with epsilon edges and letter-labeled edges.
/// Discarded once [`compile`] folds it into an [`Nfa`].
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: usize,
    epsilon: Vec<Vec<usize>>,
    letters: Vec<Vec<(LetterSet, usize)>>,
    start: Option<usize>,
    accept: Option<usize>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_state(&mut self) -> usize {
        let q = self.states;
        self.states += 1;
        self.epsilon.push(Vec::new());
        self.letters.push(Vec::new());
        q
    }

    pub fn add_epsilon(&mut self, from: usize, to: usize) {
        self.epsilon[from].push(to);
    }

    pub fn add_letters(&mut self, from: usize, to: usize, letters: LetterSet) {
        if !letters.is_empty() {
            self.letters[from].push((letters, to));
        }
    }

    fn epsilon_closure(&self, seeds: &[usize]) -> BitSet {
        let mut set = BitSet::with_size(self.states);
        let mut stack = Vec::new();
        for &q in seeds {
            if !set.contains(q) {
                set.insert(q);
                stack.push(q);
            }
        }
        while let Some(q) = stack.pop() {
            for &r in &self.epsilon[q] {
                if !set.contains(r) {
                    set.insert(r);
                    stack.push(r);
                }
            }
        }
        set
    }

    fn into_nfa(self) -> Nfa {
        let n = self.states;
        let start = self.epsilon_closure(&[self
            .start
            .expect("compile() always sets the builder's start state")]);
        let mut accept = BitSet::with_size(n);
        accept.insert(
            self.accept
                .expect("compile() always sets the builder's accept state"),
        );

        let mut edges: LetterMap<Vec<Option<BitSet>>> = LetterMap::empty();
        for (from, outs) in self.letters.iter().enumerate() {
            for (letters, to) in outs {
                let closure = self.epsilon_closure(&[*to]);
                let mut row = vec![None; n];
                row[from] = Some(closure);
                let single = LetterMap::single(letters, row);
                edges = edges.merge(&single, |a, b| combine_rows(a, b, n));
            }
        }

        log::debug!("nfa: {n} states, {} transition ranges", edges.len());
        Nfa::from_parts(n, start, accept, edges)
    }
}

fn combine_rows(
    a: Option<&Vec<Option<BitSet>>>,
    b: Option<&Vec<Option<BitSet>>>,
    n: usize,
) -> Vec<Option<BitSet>> {
    match (a, b) {
        (None, None) => vec![None; n],
        (Some(x), None) => x.clone(),
        (None, Some(y)) => y.clone(),
        (Some(x), Some(y)) => (0..n)
            .map(|i| match (&x[i], &y[i]) {
                (None, None) => None,
                (Some(xi), None) => Some(xi.clone()),
                (None, Some(yi)) => Some(yi.clone()),
                (Some(xi), Some(yi)) => {
                    let mut merged = xi.clone();
                    merged.union_with(yi);
                    Some(merged)
                }
            })
            .collect(),
    }
}
