//! Regex term algebra, recursive-descent parser, and Thompson-construction
//! wiring for the `rex` crate.

pub mod ast;
pub mod compile;
pub mod error;
pub mod parser;

pub use ast::Rx;
pub use error::ParseError;
pub use parser::{parse, parse_with_config, ParserConfig};
