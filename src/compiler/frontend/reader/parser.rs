use nom::combinator::map;

use super::whitespace::{parse_hashbang, parse_inter_token_space};
use super::{
    fail, group, identifier, import, module_block, number, punctuator, regex, string, template,
    Input, ParseResult,
};
use crate::compiler::frontend::syntax::{precedes_expression, Delimiter, Node, NodeKind, Program};

/// Parse a complete program
///
/// ```grammar
/// <program> -> <hashbang>? <node>*
/// ```
pub fn parse_program(input: Input) -> ParseResult<Program> {
    let (s, _) = parse_hashbang(input)?;
    let (s, (body, _)) = parse_sequence(s, None)?;

    Ok((s, Program::new(body)))
}

/// Reads nodes until `closer` or, without a closer, until the end of input.
/// The closing delimiter is not consumed. Also yields whether a line terminator
/// precedes the point where reading stopped.
pub fn parse_sequence(input: Input, closer: Option<char>) -> ParseResult<(Vec<Node>, bool)> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut rest = input;

    loop {
        let (s, newline) = parse_inter_token_space(rest)?;

        match s.fragment().chars().next() {
            None if closer.is_none() => return Ok((s, (nodes, newline))),
            None => return fail(s, "unexpected end of input"),
            Some(c) if group::is_closing_delimiter(c) => {
                return if closer == Some(c) {
                    Ok((s, (nodes, newline)))
                } else {
                    fail(s, "unbalanced delimiter")
                }
            }
            Some(_) => {
                let (s, node) = parse_node(s, &nodes)?;
                nodes.push(node.with_newline(newline));
                rest = s;
            }
        }
    }
}

/// Reads a single node. `preceding` are the nodes before it in the same sequence,
/// they decide how an ambiguous `/` is read.
pub fn parse_node<'a>(input: Input<'a>, preceding: &[Node]) -> ParseResult<'a, Node> {
    let start = input.location_offset();
    let (s, kind) = parse_node_kind(input, preceding)?;

    Ok((s, Node::new(kind, start..s.location_offset())))
}

fn parse_node_kind<'a>(input: Input<'a>, preceding: &[Node]) -> ParseResult<'a, NodeKind> {
    let c = match input.fragment().chars().next() {
        Some(c) => c,
        None => return fail(input, "unexpected end of input"),
    };

    match c {
        '(' | '[' | '{' => map(group::parse, NodeKind::Group)(input),
        '"' | '\'' => map(string::parse, NodeKind::Str)(input),
        '`' => map(template::parse, NodeKind::Template)(input),
        '/' if regex_allowed(preceding) => map(regex::parse, |r: Input| {
            NodeKind::Regex(r.fragment().to_string())
        })(input),
        _ if number::starts_number(&input) => map(number::parse, |n: Input| {
            NodeKind::Number(n.fragment().to_string())
        })(input),
        _ if identifier::starts_identifier(&input) => parse_word(input, preceding.last()),
        _ => match punctuator::parse(input) {
            Ok((s, p)) => Ok((s, NodeKind::Punct(p))),
            Err(nom::Err::Error(_)) => fail(input, "unexpected character"),
            Err(e) => Err(e),
        },
    }
}

fn parse_word<'a>(input: Input<'a>, prev: Option<&Node>) -> ParseResult<'a, NodeKind> {
    let (s, word) = identifier::parse(input)?;
    let is_property = prev.map_or(false, |n| n.is_punct(".") || n.is_punct("?."));

    match *word.fragment() {
        "import" if !is_property => import::parse_after_keyword(s),
        "module" if !is_property => module_block::parse_after_keyword(s),
        w => Ok((s, NodeKind::Word(w.to_string()))),
    }
}

/// Whether a `/` following `preceding` starts a regular expression rather than a division.
fn regex_allowed(preceding: &[Node]) -> bool {
    match preceding {
        [] => true,
        [.., head, last] if is_statement_head(head, last) => true,
        [.., last] => match &last.kind {
            NodeKind::Word(w) => precedes_expression(w),
            NodeKind::Punct(p) => !matches!(*p, "++" | "--"),
            NodeKind::Group(g) => g.delimiter == Delimiter::Brace,
            NodeKind::ImportDeclaration(_) => true,
            _ => false,
        },
    }
}

/// `if (...)`, `while (...)`, `for (...)` and `with (...)` are followed by a statement.
fn is_statement_head(keyword: &Node, group: &Node) -> bool {
    let is_paren = group.as_group().map_or(false, |g| g.delimiter == Delimiter::Paren);
    let is_head_keyword = matches!(keyword.as_word(), Some("if" | "while" | "for" | "with"));

    is_paren && is_head_keyword
}
