//! Antimirov-style regular expression matcher.
//!
//! Parses a regex into an [`Rx`] term, compiles it to a [`Nfa`] via
//! Thompson construction, and matches input strings with simultaneous-state
//! simulation, avoiding both catastrophic backtracking and DFA blowup.
//!
//! ```
//! let re = rex::Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,6}").unwrap();
//! assert!(re.is_match("erik@osheim.org"));
//! assert!(!re.is_match("erik@osheim.org."));
//! ```

pub use rex_automata::{BitSet, BuildError, LetterMap, LetterSet, Nfa, Size, SizeError};
pub use rex_syntax::{parse, parse_with_config, ParseError, ParserConfig, Rx};

use thiserror::Error;

/// Either half of the parse-then-compile pipeline can fail; `Regex::new`
/// merges both error types into one.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// A compiled regular expression, ready to match input strings.
#[derive(Debug, Clone)]
pub struct Regex {
    nfa: Nfa,
}

impl Regex {
    /// Parses `pattern` and compiles it with the default [`ParserConfig`].
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        Self::with_config(pattern, ParserConfig::default())
    }

    pub fn with_config(pattern: &str, config: ParserConfig) -> Result<Regex, Error> {
        let rx = parse_with_config(pattern, config)?;
        let nfa = rex_automata::compile(&rx)?;
        log::debug!("compiled regex {pattern:?} into {} states", nfa.states());
        Ok(Regex { nfa })
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.nfa.accepts(input)
    }

    pub fn is_not_match(&self, input: &str) -> bool {
        self.nfa.rejects(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_star_does_not_blow_up() {
        let re = Regex::new("(o*)*a").unwrap();
        assert!(re.is_match(&format!("{}a", "o".repeat(16))));
        assert!(re.is_not_match(&"o".repeat(16)));
    }

    #[test]
    fn email_like_pattern() {
        let re = Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,6}").unwrap();
        assert!(re.is_match("erik@osheim.org"));
        assert!(re.is_not_match("erik@osheim.org."));
    }

    #[test]
    fn alternation() {
        let re = Regex::new("a|b").unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_not_match("c"));
    }

    #[test]
    fn empty_language() {
        let re = Regex::new("\u{2205}").unwrap();
        assert!(re.is_not_match(""));
        assert!(re.is_not_match("a"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_string() {
        let re = Regex::new("").unwrap();
        assert!(re.is_match(""));
        assert!(re.is_not_match("a"));
    }

    #[test]
    fn negated_class() {
        let re = Regex::new("[^abc]").unwrap();
        assert!(re.is_match("d"));
        assert!(re.is_not_match("a"));
    }

    #[test]
    fn single_letter() {
        let re = Regex::new("A").unwrap();
        assert!(re.is_match("A"));
    }

    #[test]
    fn var_node_is_rejected_at_build_time() {
        let err = rex_automata::compile(&Rx::var(0));
        assert!(matches!(err, Err(BuildError::UnsupportedVar)));
    }
}
