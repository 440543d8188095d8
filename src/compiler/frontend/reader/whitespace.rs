use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_until, take_while1};
use nom::combinator::{cut, map, opt, recognize, value};
use nom::error::context;
use nom::multi::fold_many0;
use nom::sequence::{pair, preceded, terminated};

use super::{Input, ParseResult};

#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[inline]
pub fn is_white_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Skips white space and comments between two tokens.
/// Yields `true` when a line terminator was skipped, including one inside a block comment.
#[inline]
pub fn parse_inter_token_space(input: Input) -> ParseResult<bool> {
    let atmosphere = alt((parse_white_space, parse_line_comment, parse_block_comment));
    fold_many0(atmosphere, || false, |seen, newline| seen || newline)(input)
}

#[inline]
pub fn parse_white_space(input: Input) -> ParseResult<bool> {
    map(take_while1(is_white_space), |ws: Input| {
        ws.fragment().contains(is_line_terminator)
    })(input)
}

#[inline]
fn parse_line_comment(input: Input) -> ParseResult<bool> {
    value(false, pair(tag("//"), take_till(is_line_terminator)))(input)
}

#[inline]
fn parse_block_comment(input: Input) -> ParseResult<bool> {
    let comment_text = terminated(take_until("*/"), tag("*/"));
    let comment = preceded(tag("/*"), cut(comment_text));

    context(
        "unterminated comment",
        map(comment, |text: Input| text.fragment().contains(is_line_terminator)),
    )(input)
}

/// `#!` line at the very beginning of a program
#[inline]
pub fn parse_hashbang(input: Input) -> ParseResult<Option<Input>> {
    if input.location_offset() != 0 {
        return Ok((input, None));
    }
    opt(recognize(pair(tag("#!"), take_till(is_line_terminator))))(input)
}
