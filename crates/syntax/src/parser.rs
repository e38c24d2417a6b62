//! Recursive-descent parser over the regex grammar.
//!
//! Precedence, lowest to highest: alternation `|`, concatenation
//! (juxtaposition), postfix repetition (`*`, `+`, `?`, `{lo,hi}`), atoms
//! (characters, escapes, groups, classes, `.`, `∅`).

use crate::ast::Rx;
use crate::error::ParseError;
use rex_automata::LetterSet;
use std::iter::Peekable;
use std::str::CharIndices;

/// Tunable limits consulted while parsing. Not part of the regex grammar
/// itself — a guard against pathological input, the same role `regex` and
/// RE2 give their own repetition caps.
#[derive(Clone, Copy, Debug)]
pub struct ParserConfig {
    /// Upper bound accepted for either side of a `{lo,hi}` repetition.
    pub max_repeat: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_repeat: 1_000 }
    }
}

/// Parses `input` with the default [`ParserConfig`].
pub fn parse(input: &str) -> Result<Rx, ParseError> {
    parse_with_config(input, ParserConfig::default())
}

pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Rx, ParseError> {
    let mut parser = Parser {
        input,
        chars: input.char_indices().peekable(),
        config,
    };
    let rx = parser.parse_alternation()?;
    match parser.peek() {
        Some(c) => Err(ParseError::UnexpectedCharacter { position: parser.pos(), found: c }),
        None => {
            log::trace!("parsed {input:?}");
            Ok(rx)
        }
    }
}

const METACHARS: &[char] = &['{', '}', '[', ']', '(', ')', '^', '$', '.', '|', '*', '+', '?', '\\'];

fn is_metachar(c: char) -> bool {
    METACHARS.contains(&c)
}

/// A parsed character literal: either a full Unicode scalar value (from raw
/// input text or a named escape) or a raw 16-bit code unit (from `\uXXXX`,
/// which may be a lone surrogate half with no `char` representation).
enum CharLit {
    Scalar(char),
    CodeUnit(u16),
}

/// Encodes a scalar value as one or two `Letter` code-unit terms, per the
/// 16-bit code unit semantics: surrogate pairs are never combined back into
/// a single step, matching by code unit.
fn scalar_to_rx(c: char) -> Rx {
    let mut buf = [0u16; 2];
    let units = c.encode_utf16(&mut buf);
    match units {
        [unit] => Rx::letter(*unit),
        [hi, lo] => Rx::concat(Rx::letter(*hi), Rx::letter(*lo)),
        _ => unreachable!("char encodes to at most two UTF-16 code units"),
    }
}

fn char_lit_to_rx(lit: CharLit) -> Rx {
    match lit {
        CharLit::CodeUnit(u) => Rx::letter(u),
        CharLit::Scalar(c) => scalar_to_rx(c),
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn pos(&mut self) -> usize {
        self.chars.peek().map(|&(i, _)| i).unwrap_or(self.input.len())
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn expect(&mut self, want: char, unterminated: impl FnOnce(usize) -> ParseError, start: usize) -> Result<(), ParseError> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            _ => Err(unterminated(start)),
        }
    }

    fn parse_alternation(&mut self) -> Result<Rx, ParseError> {
        let mut rx = self.parse_concat()?;
        while self.peek() == Some('|') {
            self.bump();
            let rhs = self.parse_concat()?;
            rx = Rx::choice(rx, rhs);
        }
        Ok(rx)
    }

    fn parse_concat(&mut self) -> Result<Rx, ParseError> {
        let mut rx = Rx::empty();
        while let Some(c) = self.peek() {
            if c == '|' || c == ')' {
                break;
            }
            let term = self.parse_repeat()?;
            rx.push(term);
        }
        Ok(rx)
    }

    fn parse_repeat(&mut self) -> Result<Rx, ParseError> {
        let start = self.pos();
        let atom = self.parse_atom()?;
        match self.peek() {
            Some('*') => {
                self.bump();
                Ok(Rx::star(atom))
            }
            Some('+') => {
                self.bump();
                Ok(Rx::plus(atom))
            }
            Some('?') => {
                self.bump();
                Ok(Rx::opt(atom))
            }
            Some('{') => {
                self.bump();
                self.parse_braced_repeat(atom, start)
            }
            _ => Ok(atom),
        }
    }

    fn parse_braced_repeat(&mut self, atom: Rx, start: usize) -> Result<Rx, ParseError> {
        let lo = self.parse_number(start)?;
        let hi = match self.peek() {
            Some(',') => {
                self.bump();
                if self.peek() == Some('}') {
                    None
                } else {
                    Some(self.parse_number(start)?)
                }
            }
            _ => Some(lo),
        };
        self.expect('}', |p| ParseError::UnterminatedRepeat { position: p }, start)?;

        if let Some(h) = hi {
            if h < lo {
                return Err(ParseError::ReversedRepeat { position: start });
            }
            if h > self.config.max_repeat {
                return Err(ParseError::RepeatTooLarge { position: start, max: self.config.max_repeat });
            }
        } else if lo > self.config.max_repeat {
            return Err(ParseError::RepeatTooLarge { position: start, max: self.config.max_repeat });
        }

        Ok(Rx::repeat(atom, lo, hi))
    }

    fn parse_number(&mut self, start: usize) -> Result<u32, ParseError> {
        let mut n: u32 = 0;
        let mut any = false;
        while let Some(c) = self.peek() {
            match c.to_digit(10) {
                Some(d) => {
                    self.bump();
                    n = n
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(d))
                        .ok_or(ParseError::RepeatTooLarge { position: start, max: self.config.max_repeat })?;
                    any = true;
                }
                None => break,
            }
        }
        if !any {
            return Err(ParseError::InvalidRepeat { position: start });
        }
        Ok(n)
    }

    fn parse_atom(&mut self) -> Result<Rx, ParseError> {
        let start = self.pos();
        match self.peek() {
            None => Err(ParseError::UnexpectedEof { position: start }),
            Some('(') => {
                self.bump();
                let inner = self.parse_alternation()?;
                self.expect(')', |p| ParseError::UnterminatedGroup { position: p }, start)?;
                Ok(inner)
            }
            Some('.') => {
                self.bump();
                Ok(Rx::letters(LetterSet::dot()))
            }
            Some('∅') => {
                self.bump();
                Ok(Rx::phi())
            }
            Some('[') => {
                self.bump();
                self.parse_class(start)
            }
            Some(c) if is_metachar(c) => Err(ParseError::UnexpectedCharacter { position: start, found: c }),
            Some(_) => {
                let lit = self.parse_char_literal(start)?;
                Ok(char_lit_to_rx(lit))
            }
        }
    }

    fn parse_char_literal(&mut self, start: usize) -> Result<CharLit, ParseError> {
        match self.bump() {
            None => Err(ParseError::UnexpectedEof { position: start }),
            Some('\\') => self.parse_escape(start),
            Some(c) => Ok(CharLit::Scalar(c)),
        }
    }

    fn parse_escape(&mut self, start: usize) -> Result<CharLit, ParseError> {
        match self.bump() {
            None => Err(ParseError::UnexpectedEof { position: start }),
            Some('u') => {
                let mut value: u32 = 0;
                for _ in 0..4 {
                    let d = self.bump().ok_or(ParseError::UnexpectedEof { position: start })?;
                    let digit = d.to_digit(16).ok_or(ParseError::InvalidEscape { position: start, found: d })?;
                    value = value * 16 + digit;
                }
                Ok(CharLit::CodeUnit(value as u16))
            }
            Some('n') => Ok(CharLit::Scalar('\n')),
            Some('t') => Ok(CharLit::Scalar('\t')),
            Some('r') => Ok(CharLit::Scalar('\r')),
            Some('f') => Ok(CharLit::Scalar('\u{0C}')),
            Some('b') => Ok(CharLit::Scalar('\u{08}')),
            Some('0') => Ok(CharLit::Scalar('\0')),
            Some('\\') => Ok(CharLit::Scalar('\\')),
            // Not a METACHAR, but `-` is only special inside a class; every
            // class-based example in the corpus allows escaping it literally
            // so a class can mention `-` without it being read as a range.
            Some('-') => Ok(CharLit::Scalar('-')),
            Some(c) if is_metachar(c) => Ok(CharLit::Scalar(c)),
            Some(c) => Err(ParseError::InvalidEscape { position: start, found: c }),
        }
    }

    fn char_lit_to_unit(&self, lit: CharLit, position: usize) -> Result<u16, ParseError> {
        match lit {
            CharLit::CodeUnit(u) => Ok(u),
            CharLit::Scalar(c) => {
                let mut buf = [0u16; 2];
                let units = c.encode_utf16(&mut buf);
                if units.len() == 1 {
                    Ok(units[0])
                } else {
                    Err(ParseError::InvalidRangeEndpoint { position })
                }
            }
        }
    }

    fn parse_class(&mut self, start: usize) -> Result<Rx, ParseError> {
        let negated = if self.peek() == Some('^') {
            self.bump();
            true
        } else {
            false
        };

        let mut set = LetterSet::empty();
        let mut any = false;

        loop {
            match self.peek() {
                None => return Err(ParseError::UnterminatedClass { position: start }),
                Some(']') => {
                    if !any {
                        return Err(ParseError::EmptyClass { position: start });
                    }
                    self.bump();
                    break;
                }
                Some(_) => {
                    let item_pos = self.pos();
                    let lo_lit = self.parse_char_literal(item_pos)?;
                    let lo = self.char_lit_to_unit(lo_lit, item_pos)?;

                    if self.peek() == Some('-') {
                        let checkpoint = self.chars.clone();
                        self.bump();
                        if self.peek() == Some(']') {
                            self.chars = checkpoint;
                            set = set.union(&LetterSet::single(lo));
                        } else {
                            let hi_lit = self.parse_char_literal(item_pos)?;
                            let hi = self.char_lit_to_unit(hi_lit, item_pos)?;
                            if lo > hi {
                                return Err(ParseError::ReversedRange { position: item_pos });
                            }
                            set = set.union(&LetterSet::range(lo, hi));
                        }
                    } else {
                        set = set.union(&LetterSet::single(lo));
                    }
                    any = true;
                }
            }
        }

        if negated {
            set = set.complement();
        }
        Ok(Rx::letters(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Rx {
        parse(s).unwrap_or_else(|e| panic!("failed to parse {s:?}: {e}"))
    }

    #[test]
    fn empty_pattern_is_empty_rx() {
        assert_eq!(p(""), Rx::empty());
    }

    #[test]
    fn literal_chars_concatenate() {
        assert_eq!(p("ab"), Rx::concat(Rx::letter('a' as u16), Rx::letter('b' as u16)));
    }

    #[test]
    fn alternation_and_grouping() {
        let rx = p("a|b");
        assert_eq!(rx, Rx::choice(Rx::letter('a' as u16), Rx::letter('b' as u16)));
    }

    #[test]
    fn phi_literal() {
        assert_eq!(p("∅"), Rx::phi());
    }

    #[test]
    fn star_plus_opt() {
        let a = Rx::letter('a' as u16);
        assert_eq!(p("a*"), Rx::star(a.clone()));
        assert_eq!(p("a+"), Rx::plus(a.clone()));
        assert_eq!(p("a?"), Rx::opt(a));
    }

    #[test]
    fn escaped_dash_is_a_literal() {
        assert_eq!(p(r"\-"), Rx::letter('-' as u16));
        assert_eq!(p(r"[A-Za-z0-9._%+\-]"), p("[A-Za-z0-9._%+-]"));
    }

    #[test]
    fn braced_repeat_bounds() {
        let a = Rx::letter('a' as u16);
        assert_eq!(p("a{2,6}"), Rx::repeat(a.clone(), 2, Some(6)));
        assert_eq!(p("a{2,}"), Rx::repeat(a.clone(), 2, None));
        assert_eq!(p("a{3}"), Rx::repeat(a, 3, Some(3)));
    }

    #[test]
    fn negated_class() {
        let rx = p("[^abc]");
        match rx {
            Rx::Letters(set) => {
                assert!(!set.contains('a' as u16));
                assert!(set.contains('d' as u16));
            }
            other => panic!("expected Letters, got {other:?}"),
        }
    }

    #[test]
    fn class_range_and_trailing_dash() {
        let rx = p("[a-z-]");
        match rx {
            Rx::Letters(set) => {
                assert!(set.contains('m' as u16));
                assert!(set.contains('-' as u16));
            }
            other => panic!("expected Letters, got {other:?}"),
        }
    }

    #[test]
    fn unicode_escape_is_raw_code_unit() {
        assert_eq!(p("\\u0041"), Rx::letter(0x0041));
    }

    #[test]
    fn reversed_range_is_an_error() {
        let err = parse("[z-a]").unwrap_err();
        assert!(matches!(err, ParseError::ReversedRange { .. }));
    }

    #[test]
    fn unterminated_group_reports_position() {
        let err = parse("(a").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedGroup { position: 0 }));
    }

    #[test]
    fn error_position_is_within_input_bounds() {
        for pattern in ["(", "[a", "a{", "\\q", "a**" /* trailing stray */] {
            if let Err(e) = parse(pattern) {
                assert!(e.position() <= pattern.len());
            }
        }
    }
}
