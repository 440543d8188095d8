use nom::bytes::complete::take;
use nom::combinator::value;
use nom::error::ErrorKind;

use super::{reject, Input, ParseResult};

/// All punctuators, longest first so that the first match is the longest match.
/// Brackets are not punctuators, they are read as groups.
pub const PUNCTUATORS: &[&str] = &[
    ">>>=", //
    "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", //
    "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "**", "<<", ">>", //
    "=", "+", "-", "*", "/", "%", "&", "|", "^", "!", "~", "<", ">", "?", ":", ";", ",", ".",
    "@",
];

pub fn parse(input: Input) -> ParseResult<&'static str> {
    let fragment = *input.fragment();
    let found = PUNCTUATORS
        .iter()
        .copied()
        .find(|p| fragment.starts_with(p) && !is_conditional_before_number(p, fragment));

    match found {
        Some(punctuator) => value(punctuator, take(punctuator.len()))(input),
        None => reject(input, ErrorKind::OneOf),
    }
}

// `a?.5:1` is a conditional, not an optional chain
#[inline]
fn is_conditional_before_number(punctuator: &str, fragment: &str) -> bool {
    punctuator == "?."
        && fragment
            .as_bytes()
            .get(2)
            .map_or(false, |b| b.is_ascii_digit())
}
