use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1, take_while_m_n};
use nom::character::complete::{anychar, char};
use nom::combinator::{opt, recognize, verify};
use nom::multi::many0;
use nom::sequence::{delimited, preceded, tuple};

use super::{Input, ParseResult};

//////////////////////////////////////////
// Identifier names
/////////////////////////////////////////

/// Parses an identifier name, reserved words included.
/// Private names (`#field`) are read as a single identifier. Unicode escapes are
/// accepted and kept as written.
pub fn parse(input: Input) -> ParseResult<Input> {
    let initial = alt((
        recognize(verify(anychar, |c: &char| is_identifier_start(*c))),
        parse_unicode_escape,
    ));
    let rest = many0(alt((take_while1(is_identifier_part), parse_unicode_escape)));

    recognize(tuple((opt(char('#')), initial, rest)))(input)
}

/// Parses exactly the identifier `name`, so `meta` doesn't match `metadata`.
pub fn parse_name<'a>(name: &'static str) -> impl FnMut(Input<'a>) -> ParseResult<'a, Input<'a>> {
    move |input: Input<'a>| verify(parse, |word: &Input| *word.fragment() == name)(input)
}

/// `\uXXXX` or `\u{X...}` standing for an identifier character
fn parse_unicode_escape(input: Input) -> ParseResult<Input> {
    let is_hex = |c: char| c.is_ascii_hexdigit();
    let braced = delimited(char('{'), take_while_m_n(1, 6, is_hex), char('}'));
    let code = preceded(tag("\\u"), alt((braced, take_while_m_n(4, 4, is_hex))));

    recognize(verify(code, |digits: &Input| {
        u32::from_str_radix(digits.fragment(), 16)
            .ok()
            .and_then(char::from_u32)
            .map_or(false, is_identifier_part)
    }))(input)
}

#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

#[inline]
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'
}

/// True when `input` starts with something that [`parse`] accepts.
pub fn starts_identifier(input: &Input) -> bool {
    let mut chars = input.fragment().chars();
    let starts = |c: Option<char>, rest: &str| match c {
        Some('\\') => rest.starts_with('u'),
        Some(c) => is_identifier_start(c),
        None => false,
    };

    match chars.next() {
        Some('#') => {
            let next = chars.next();
            starts(next, chars.as_str())
        }
        c => starts(c, chars.as_str()),
    }
}
