use crate::compiler::frontend::syntax::{Delimiter, Node, NodeKind, StringLiteral};
use crate::compiler::options::Options;

/// Puts `import { <runtime> } from "<shim>";` on its own line in front of `body`,
/// unless the first statement already is exactly that import.
pub fn inject(body: Vec<Node>, options: &Options) -> Vec<Node> {
    if body.first().map_or(false, |first| is_shim_import(first, options)) {
        log::trace!("shim import already present");
        return body;
    }

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(shim_import(options));
    out.push(Node::punct(";"));
    out.extend(
        body.into_iter()
            .enumerate()
            .map(|(i, node)| if i == 0 { node.with_newline(true) } else { node }),
    );
    out
}

pub fn shim_import(options: &Options) -> Node {
    let bindings = Node::group(Delimiter::Brace, vec![Node::word(options.runtime_name.as_str())]);

    Node::import_declaration(
        vec![bindings, Node::word("from")],
        StringLiteral::quoted(options.shim_specifier.as_str()),
    )
}

fn is_shim_import(node: &Node, options: &Options) -> bool {
    match &node.kind {
        NodeKind::ImportDeclaration(declaration) => {
            declaration.source.value == options.shim_specifier
                && matches!(
                    declaration.clause.as_slice(),
                    [bindings, from]
                        if from.is_word("from")
                            && bindings.as_group().map_or(false, |g| {
                                g.delimiter == Delimiter::Brace
                                    && matches!(g.children.as_slice(), [name] if name.is_word(&options.runtime_name))
                            })
                )
        }
        _ => false,
    }
}
