use crate::compiler::frontend::syntax::{Node, NodeKind, StringLiteral};

/// `/abs.js`, `./sibling.js` and `../parent.js` are local.
/// Bare specifiers and full URLs are left alone.
pub fn is_local_file_path(specifier: &str) -> bool {
    specifier.starts_with('/') || specifier.starts_with("./") || specifier.starts_with("../")
}

/// `import.meta.url`
pub fn meta_url() -> Vec<Node> {
    vec![Node::meta_property(), Node::punct("."), Node::word("url")]
}

/// `new URL(<specifier>, import.meta.url)`
pub fn resolve_against_meta_url(specifier: StringLiteral) -> Vec<Node> {
    let mut arguments = vec![
        Node::synthetic(NodeKind::Str(specifier)),
        Node::punct(","),
    ];
    arguments.extend(meta_url());

    vec![Node::word("new"), Node::word("URL"), Node::parens(arguments)]
}

/// `JSON.stringify(<expression>)`
pub fn stringify(expression: Vec<Node>) -> Vec<Node> {
    vec![
        Node::word("JSON"),
        Node::punct("."),
        Node::word("stringify"),
        Node::parens(expression),
    ]
}

/// Whether `nodes` already are `new URL("<local path>", import.meta.url)`.
pub fn is_resolved_against_meta_url(nodes: &[Node]) -> bool {
    match nodes {
        [new, url, arguments] if new.is_word("new") && url.is_word("URL") => {
            match arguments.as_group() {
                Some(group) => matches!(
                    group.children.as_slice(),
                    [specifier, comma, meta, dot, url]
                        if specifier.as_string_literal().map_or(false, |s| is_local_file_path(&s.value))
                            && comma.is_punct(",")
                            && meta.kind == NodeKind::MetaProperty
                            && dot.is_punct(".")
                            && url.is_word("url")
                ),
                None => false,
            }
        }
        _ => false,
    }
}
