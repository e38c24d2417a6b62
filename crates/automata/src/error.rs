use thiserror::Error;

/// Failure building an [`crate::nfa::Nfa`] from a compiled term.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The term contains a `Var` node, which has no operational meaning for
    /// the NFA compiler.
    #[error("cannot compile an unresolved variable node into an automaton")]
    UnsupportedVar,
}

/// Failure constructing a [`crate::size::Size`].
#[derive(Debug, Error)]
pub enum SizeError {
    #[error("size cannot be built from a negative integer")]
    Negative,
}
