use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{anychar, char};
use nom::combinator::{cut, not, recognize};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};

use super::parser::parse_sequence;
use super::{Input, ParseResult};
use crate::compiler::frontend::syntax::Template;

/// Template literal
///
/// ```grammar
/// <template> -> ` <chunk> ( ${ <sequence> } <chunk> )* `
/// ```
///
/// Chunks are kept raw, substitutions are read as full node sequences.
pub fn parse(input: Input) -> ParseResult<Template> {
    let (mut rest, _) = parse_backtick(input)?;
    let mut quasis = Vec::new();
    let mut exprs = Vec::new();

    loop {
        let (s, chunk) = parse_chunk(rest)?;
        quasis.push(chunk.fragment().to_string());

        if let Ok((s, _)) = parse_backtick(s) {
            return Ok((s, Template { quasis, exprs }));
        }

        let (s, _) = context("unterminated template literal", cut(parse_substitution_open))(s)?;
        let (s, (nodes, _)) = parse_sequence(s, Some('}'))?;
        let (s, _) = parse_substitution_close(s)?;
        exprs.push(nodes);
        rest = s;
    }
}

#[inline]
fn parse_backtick(input: Input) -> ParseResult<char> {
    char('`')(input)
}

#[inline]
fn parse_substitution_open(input: Input) -> ParseResult<Input> {
    tag("${")(input)
}

#[inline]
fn parse_substitution_close(input: Input) -> ParseResult<char> {
    char('}')(input)
}

fn parse_chunk(input: Input) -> ParseResult<Input> {
    let escape = recognize(preceded(char('\\'), anychar));
    let dollar = terminated(tag("$"), not(char('{')));

    recognize(many0(alt((is_not("`\\$"), escape, dollar))))(input)
}
