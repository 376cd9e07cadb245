//! Source text to [`Program`]: an indentation-aware lexer followed by a
//! recursive-descent parser.
//!
//! A line at the top level that is neither a definition, a declaration nor a
//! rule ends the program there; see [`Program::truncated_at`].

mod lexer;
mod program_parser;
mod text_cursor;
mod token_stream;

pub use lexer::{tokenize, Lexer, INDENT_WIDTH};
pub use program_parser::{parse_program, ProgramParser};

use crate::error::SyntaxError;
use crate::model::Program;

pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    parse_program(tokenize(source)?)
}
