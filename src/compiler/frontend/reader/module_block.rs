use super::group;
use super::whitespace::parse_inter_token_space;
use super::{Input, ParseResult};
use crate::compiler::frontend::syntax::NodeKind;

/// Module block literal, entered after the word `module` was read.
///
/// ```grammar
/// <module block> -> module [no line terminator here] { <node>* }
/// ```
///
/// Anything else leaves `module` as a plain word, it's a perfectly fine identifier.
pub fn parse_after_keyword(input: Input) -> ParseResult<NodeKind> {
    let (s, newline) = parse_inter_token_space(input)?;

    if !newline && s.fragment().starts_with('{') {
        let (s, body) = group::parse(s)?;
        return Ok((s, NodeKind::ModuleBlock(body)));
    }

    Ok((input, NodeKind::Word("module".to_string())))
}
