//! Letter sets, letter maps, bitsets, extended-size arithmetic, and a
//! Thompson-construction NFA compiler/executor.
//!
//! This crate knows nothing about any particular regex syntax: a term
//! language implements [`Compile`](builder::Compile) against
//! [`NfaBuilder`](builder::NfaBuilder)'s graph primitives, and
//! [`builder::compile`] folds the result into an executable
//! [`Nfa`](nfa::Nfa).

pub mod bitset;
pub mod builder;
pub mod error;
pub mod lettermap;
pub mod letterset;
pub mod nfa;
pub mod size;

pub use bitset::BitSet;
pub use builder::{compile, Compile, NfaBuilder};
pub use error::{BuildError, SizeError};
pub use lettermap::LetterMap;
pub use letterset::LetterSet;
pub use nfa::Nfa;
pub use size::Size;
