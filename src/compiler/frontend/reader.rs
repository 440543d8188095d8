pub mod error;
pub mod group;
pub mod identifier;
pub mod import;
pub mod module_block;
pub mod number;
pub mod parser;
pub mod punctuator;
pub mod regex;
pub mod string;
pub mod template;
pub mod whitespace;

use super::error::Error;
use super::syntax::Program;
use crate::compiler::source::SourceId;
use nom::error::{VerboseError, VerboseErrorKind};
use nom_locate::LocatedSpan;

pub use parser::*;

pub type Input<'a> = LocatedSpan<&'a str, SourceId>;

pub type ParseResult<'a, T> = nom::IResult<Input<'a>, T, VerboseError<Input<'a>>>;

/// Parses `text` as a complete program. Spans in the result are byte offsets into `text`.
pub fn parse(text: &str, id: SourceId) -> std::result::Result<Program, Error> {
    let input = Input::new_extra(text, id);
    let (_, program) = parse_program(input)?;
    log::trace!("read {} top level nodes from {:?}", program.body.len(), id);
    Ok(program)
}

/// Aborts parsing at `input` with an unrecoverable error.
pub(crate) fn fail<'a, T>(input: Input<'a>, context: &'static str) -> ParseResult<'a, T> {
    Err(nom::Err::Failure(VerboseError {
        errors: vec![(input, VerboseErrorKind::Context(context))],
    }))
}

/// Backtrackable error, used when a parser doesn't apply at `input`.
pub(crate) fn reject<'a, T>(input: Input<'a>, kind: nom::error::ErrorKind) -> ParseResult<'a, T> {
    use nom::error::ParseError;
    Err(nom::Err::Error(VerboseError::from_error_kind(input, kind)))
}
