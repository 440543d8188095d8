use nom::character::complete::char;
use nom::combinator::{cut, map};
use nom::error::context;
use nom::sequence::{preceded, tuple};

use super::identifier::{self, starts_identifier};
use super::parser::parse_node;
use super::whitespace::parse_inter_token_space;
use super::{fail, group, string, Input, ParseResult};
use crate::compiler::frontend::syntax::{ImportDeclaration, Node, NodeKind};

//////////////////////////////////////////
// Constructs introduced by `import`
/////////////////////////////////////////

/// Entered after the word `import` was read.
///
/// ```grammar
/// <meta property>      -> import . meta
/// <import call>        -> import ( <node>* )
/// <import declaration> -> import <node>* <string>
/// ```
///
/// Anything else leaves `import` as a plain word.
pub fn parse_after_keyword(input: Input) -> ParseResult<NodeKind> {
    let (s, _) = parse_inter_token_space(input)?;
    let fragment = *s.fragment();

    if fragment.starts_with('.') && !fragment.starts_with("...") {
        return parse_meta_property(s);
    }

    match fragment.chars().next() {
        Some('(') => map(group::parse, NodeKind::ImportCall)(s),
        Some('{' | '*' | '"' | '\'') => parse_declaration(s),
        Some(_) if starts_identifier(&s) => parse_declaration(s),
        _ => Ok((input, NodeKind::Word("import".to_string()))),
    }
}

fn parse_meta_property(input: Input) -> ParseResult<NodeKind> {
    let meta = preceded(parse_inter_token_space, identifier::parse_name("meta"));
    let (s, _) = context(
        "expected `meta` after `import.`",
        tuple((char('.'), cut(meta))),
    )(input)?;

    Ok((s, NodeKind::MetaProperty))
}

/// The clause is read as plain nodes up to the module specifier.
fn parse_declaration(input: Input) -> ParseResult<NodeKind> {
    let mut clause: Vec<Node> = Vec::new();
    let mut rest = input;

    loop {
        let (s, newline) = parse_inter_token_space(rest)?;

        match s.fragment().chars().next() {
            None | Some(';' | ')' | ']' | '}') => {
                return fail(s, "expected module specifier in import declaration")
            }
            Some('"' | '\'') => {
                let start = s.location_offset();
                let (s, source) = string::parse(s)?;
                let declaration = ImportDeclaration {
                    clause,
                    source,
                    source_span: start..s.location_offset(),
                };
                return Ok((s, NodeKind::ImportDeclaration(declaration)));
            }
            Some(_) => {
                let (s, node) = parse_node(s, &clause)?;
                clause.push(node.with_newline(newline));
                rest = s;
            }
        }
    }
}
