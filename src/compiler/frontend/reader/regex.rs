use nom::branch::alt;
use nom::bytes::complete::{is_not, take_while};
use nom::character::complete::{char, satisfy};
use nom::combinator::{cut, recognize};
use nom::error::context;
use nom::multi::{many0, many1};
use nom::sequence::{delimited, pair, preceded, tuple};

use super::identifier::is_identifier_part;
use super::whitespace::is_line_terminator;
use super::{Input, ParseResult};

/// Regular expression literal
///
/// Only called where the grammar expects an expression, the caller decides whether a `/`
/// starts a regular expression or is a division.
///
/// ```grammar
/// <regex> -> / <body> / <flags>
/// ```
pub fn parse(input: Input) -> ParseResult<Input> {
    let literal = pair(parse_body, char('/'));
    let flags = take_while(is_identifier_part);

    context(
        "unterminated regular expression",
        recognize(tuple((char('/'), cut(literal), flags))),
    )(input)
}

fn parse_body(input: Input) -> ParseResult<Input> {
    recognize(many1(alt((
        is_not("\\/[\r\n\u{2028}\u{2029}"),
        parse_escape,
        parse_class,
    ))))(input)
}

// `/` doesn't end the literal inside a class: /[/]/
fn parse_class(input: Input) -> ParseResult<Input> {
    let class_element = alt((is_not("\\]\r\n\u{2028}\u{2029}"), parse_escape));
    recognize(delimited(char('['), many0(class_element), char(']')))(input)
}

fn parse_escape(input: Input) -> ParseResult<Input> {
    recognize(preceded(char('\\'), satisfy(|c| !is_line_terminator(c))))(input)
}
