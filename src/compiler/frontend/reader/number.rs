use nom::bytes::complete::take;
use nom::error::ErrorKind;

use super::{reject, Input, ParseResult};

/// Numeric literal
///
/// Accepts decimal literals with fraction and exponent, `0x`/`0o`/`0b` prefixed
/// literals, numeric separators and the BigInt suffix. The literal is kept as written.
pub fn parse(input: Input) -> ParseResult<Input> {
    match literal_length(input.fragment()) {
        0 => reject(input, ErrorKind::Digit),
        // only ASCII is ever accepted, so bytes and chars agree
        len => take(len)(input),
    }
}

pub fn starts_number(input: &Input) -> bool {
    matches!(
        input.fragment().as_bytes(),
        [b'0'..=b'9', ..] | [b'.', b'0'..=b'9', ..]
    )
}

fn literal_length(text: &str) -> usize {
    let bytes = text.as_bytes();
    if !matches!(bytes, [b'0'..=b'9', ..] | [b'.', b'0'..=b'9', ..]) {
        return 0;
    }

    let radix_prefixed = matches!(
        bytes,
        [b'0', b'x' | b'X' | b'o' | b'O' | b'b' | b'B', ..]
    );
    let mut seen_dot = false;
    let mut seen_exponent = false;
    let mut len = 0;

    while let Some(&b) = bytes.get(len) {
        match b {
            b'e' | b'E' if !radix_prefixed => {
                seen_exponent = true;
                len += 1;
            }
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' => len += 1,
            b'.' if !radix_prefixed && !seen_dot && !seen_exponent => {
                seen_dot = true;
                len += 1;
            }
            b'+' | b'-' if !radix_prefixed && matches!(bytes[len - 1], b'e' | b'E') => len += 1,
            _ => break,
        }
    }

    len
}
