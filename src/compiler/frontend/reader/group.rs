use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::value;

use super::parser::parse_sequence;
use super::{Input, ParseResult};
use crate::compiler::frontend::syntax::{Delimiter, Group};

/// Parse a bracketed group
///
/// ```grammar
/// <group> -> ( <node>* ) | [ <node>* ] | { <node>* }
/// ```
pub fn parse(input: Input) -> ParseResult<Group> {
    let (s, delimiter) = parse_open(input)?;
    let (s, (children, close_newline)) = parse_sequence(s, Some(delimiter.close()))?;
    let (s, _) = parse_close(s, delimiter)?;

    Ok((
        s,
        Group {
            delimiter,
            children,
            close_newline,
        },
    ))
}

#[inline]
fn parse_open(input: Input) -> ParseResult<Delimiter> {
    alt((
        value(Delimiter::Paren, char('(')),
        value(Delimiter::Bracket, char('[')),
        value(Delimiter::Brace, char('{')),
    ))(input)
}

#[inline]
fn parse_close(input: Input, delimiter: Delimiter) -> ParseResult<char> {
    char(delimiter.close())(input)
}

#[inline]
pub fn is_closing_delimiter(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}
