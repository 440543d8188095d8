use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while_m_n};
use nom::character::complete::{anychar, char, one_of};
use nom::combinator::{consumed, cut, map, map_res, value, verify};
use nom::error::context;
use nom::multi::fold_many0;
use nom::sequence::{delimited, preceded, terminated};

use super::{Input, ParseResult};
use crate::compiler::frontend::syntax::StringLiteral;

//////////////////////////////
// String literal parser
//////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringElement<'a> {
    Literal(&'a str),
    EscapedChar(char),
    /// UTF-16 code unit from a `\u` escape, possibly half of a surrogate pair
    CodeUnit(u32),
    Continuation,
}

const REPLACEMENT: char = '\u{fffd}';

/// Accumulates the cooked value of a literal
#[derive(Debug, Default)]
struct Cooked {
    text: String,
    high_surrogate: Option<u32>,
}

impl Cooked {
    fn push(mut self, element: StringElement) -> Self {
        match element {
            StringElement::CodeUnit(unit) if (0xD800..0xDC00).contains(&unit) => {
                self.flush();
                self.high_surrogate = Some(unit);
            }
            StringElement::CodeUnit(unit) if (0xDC00..0xE000).contains(&unit) => {
                let c = match self.high_surrogate.take() {
                    Some(high) => {
                        char::from_u32(0x10000 + ((high - 0xD800) << 10) + (unit - 0xDC00))
                    }
                    None => None,
                };
                self.text.push(c.unwrap_or(REPLACEMENT));
            }
            StringElement::CodeUnit(unit) => {
                self.flush();
                self.text.push(char::from_u32(unit).unwrap_or(REPLACEMENT));
            }
            StringElement::Literal(s) => {
                self.flush();
                self.text.push_str(s);
            }
            StringElement::EscapedChar(c) => {
                self.flush();
                self.text.push(c);
            }
            StringElement::Continuation => self.flush(),
        }
        self
    }

    // a lone high surrogate can't be represented in a Rust string
    fn flush(&mut self) {
        if self.high_surrogate.take().is_some() {
            self.text.push(REPLACEMENT);
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.text
    }
}

pub fn parse(input: Input) -> ParseResult<StringLiteral> {
    let literal = alt((quoted('"', "\"\\\r\n"), quoted('\'', "'\\\r\n")));

    map(consumed(literal), |(raw, value)| {
        StringLiteral::new(*raw.fragment(), value)
    })(input)
}

fn quoted<'a>(
    quote: char,
    stop_chars: &'static str,
) -> impl FnMut(Input<'a>) -> ParseResult<'a, String> {
    move |input: Input<'a>| {
        let elements = fold_many0(
            move |i: Input<'a>| parse_string_element(i, stop_chars),
            Cooked::default,
            Cooked::push,
        );
        let body = map(terminated(elements, char(quote)), Cooked::finish);

        context("unterminated string literal", preceded(char(quote), cut(body)))(input)
    }
}

fn parse_string_element<'a>(
    input: Input<'a>,
    stop_chars: &'static str,
) -> ParseResult<'a, StringElement<'a>> {
    alt((
        map(is_not(stop_chars), |s: Input<'a>| {
            StringElement::Literal(*s.fragment())
        }),
        preceded(char('\\'), parse_escape),
    ))(input)
}

fn parse_escape(input: Input) -> ParseResult<StringElement> {
    alt((
        value(StringElement::Continuation, parse_line_terminator_sequence),
        map(parse_hex_escape, StringElement::EscapedChar),
        map(parse_unicode_escape, StringElement::CodeUnit),
        map(parse_mnemonic_escape, StringElement::EscapedChar),
        map(anychar, StringElement::EscapedChar),
    ))(input)
}

#[inline]
fn parse_line_terminator_sequence(input: Input) -> ParseResult<Input> {
    alt((tag("\r\n"), tag("\n"), tag("\r"), tag("\u{2028}"), tag("\u{2029}")))(input)
}

#[inline]
fn parse_mnemonic_escape(input: Input) -> ParseResult<char> {
    map(one_of("nrtbfv0"), |c| match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        _ => '\0',
    })(input)
}

#[inline]
fn parse_hex_escape(input: Input) -> ParseResult<char> {
    let code = preceded(char('x'), hex_digits(2, 2));
    map(code, |c| char::from_u32(c).unwrap_or(REPLACEMENT))(input)
}

/// `\uXXXX` or `\u{X...}`, yielding the raw code point
#[inline]
fn parse_unicode_escape(input: Input) -> ParseResult<u32> {
    let braced = delimited(char('{'), hex_digits(1, 6), char('}'));
    let code = preceded(char('u'), alt((braced, hex_digits(4, 4))));

    context("invalid unicode escape", verify(code, |c: &u32| *c <= 0x10FFFF))(input)
}

fn hex_digits<'a>(min: usize, max: usize) -> impl FnMut(Input<'a>) -> ParseResult<'a, u32> {
    map_res(
        take_while_m_n(min, max, |c: char| c.is_ascii_hexdigit()),
        |digits: Input<'a>| u32::from_str_radix(digits.fragment(), 16),
    )
}
