use crate::compiler::frontend::syntax::{Delimiter, Group, Node, NodeKind, StringLiteral};
use crate::compiler::options::Options;
use crate::compiler::specifier::{
    is_local_file_path, is_resolved_against_meta_url, resolve_against_meta_url,
};

/// Rewrites the arguments of a single argument `import(...)`. Local string specifiers
/// are resolved at the call site, anything else goes through the runtime's `fixup`.
/// Any other arity is returned untouched.
pub fn rewrite(arguments: Group, options: &Options) -> Group {
    let Group {
        delimiter,
        mut children,
        close_newline,
    } = arguments;

    let len = match single_argument(&children) {
        Some(len) => len,
        None => {
            log::trace!("leaving import call with {} nodes untouched", children.len());
            return Group {
                delimiter,
                children,
                close_newline,
            };
        }
    };
    children.truncate(len);

    let children = if is_rewritten(&children, options) {
        children
    } else {
        match local_specifier(&children) {
            Some(specifier) => resolve_against_meta_url(specifier),
            None => fixup(children, &options.runtime_name),
        }
    };

    Group {
        delimiter,
        children,
        close_newline,
    }
}

/// Number of nodes making up the only argument, a trailing comma excluded.
fn single_argument(children: &[Node]) -> Option<usize> {
    let len = match children.last() {
        Some(last) if last.is_punct(",") => children.len() - 1,
        _ => children.len(),
    };

    if len == 0 || children[..len].iter().any(|n| n.is_punct(",")) {
        None
    } else {
        Some(len)
    }
}

fn local_specifier(argument: &[Node]) -> Option<StringLiteral> {
    match argument {
        [node] => node
            .as_string_literal()
            .filter(|literal| is_local_file_path(&literal.value))
            .cloned(),
        _ => None,
    }
}

fn is_rewritten(argument: &[Node], options: &Options) -> bool {
    is_resolved_against_meta_url(argument) || is_fixup_call(argument, &options.runtime_name)
}

fn is_fixup_call(argument: &[Node], runtime_name: &str) -> bool {
    matches!(
        argument,
        [runtime, dot, method, call]
            if runtime.is_word(runtime_name)
                && dot.is_punct(".")
                && method.is_word("fixup")
                && matches!(&call.kind, NodeKind::Group(g) if g.delimiter == Delimiter::Paren)
    )
}

/// `<runtime>.fixup(<argument>)`
fn fixup(argument: Vec<Node>, runtime_name: &str) -> Vec<Node> {
    vec![
        Node::word(runtime_name),
        Node::punct("."),
        Node::word("fixup"),
        Node::parens(argument),
    ]
}
