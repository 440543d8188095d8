use crate::compiler::frontend::syntax::{Delimiter, Node, NodeKind};
use crate::compiler::source::Span;
use crate::compiler::specifier::is_local_file_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitKind {
    /// A member access on `import.meta`
    MetaUrlRef,
    /// The quoted source of a static import of a local file
    StaticImportSpecifier(String),
}

/// A region of a module block's text that has to be computed by the block's creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub kind: SplitKind,
    pub span: Span,
}

impl Split {
    pub fn new(kind: SplitKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Collects the splits of a freshly read module block body in source order.
/// Spans are only meaningful for the text `nodes` were read from.
pub fn scan(nodes: &[Node]) -> Vec<Split> {
    let mut splits = Vec::new();
    scan_sequence(nodes, &mut splits);
    splits
}

fn scan_sequence(nodes: &[Node], splits: &mut Vec<Split>) {
    let mut i = 0;

    while i < nodes.len() {
        let node = &nodes[i];

        if node.kind == NodeKind::MetaProperty {
            if let Some((end, consumed)) = member_access(&nodes[i + 1..]) {
                splits.push(Split::new(SplitKind::MetaUrlRef, node.span.start..end));
                i += 1 + consumed;
                continue;
            }
        }

        scan_node(node, splits);
        i += 1;
    }
}

fn scan_node(node: &Node, splits: &mut Vec<Split>) {
    match &node.kind {
        NodeKind::Group(group) | NodeKind::ImportCall(group) | NodeKind::ModuleBlock(group) => {
            scan_sequence(&group.children, splits)
        }
        NodeKind::Template(template) => {
            for expr in template.exprs.iter() {
                scan_sequence(expr, splits)
            }
        }
        NodeKind::ImportDeclaration(declaration) => {
            scan_sequence(&declaration.clause, splits);
            if is_local_file_path(&declaration.source.value) {
                splits.push(Split::new(
                    SplitKind::StaticImportSpecifier(declaration.source.value.clone()),
                    declaration.source_span.clone(),
                ));
            }
        }
        _ => (),
    }
}

/// `.name` or `[expr]` following `import.meta`.
/// Yields where the access ends and how many nodes it spans.
fn member_access(rest: &[Node]) -> Option<(usize, usize)> {
    match rest {
        [dot, name, ..] if dot.is_punct(".") && name.as_word().is_some() => {
            Some((name.span.end, 2))
        }
        [computed, ..] => match computed.as_group() {
            Some(group) if group.delimiter == Delimiter::Bracket => Some((computed.span.end, 1)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::frontend::reader::tests::parse_nodes;

    fn splits(inp: &str) -> Vec<(SplitKind, &str)> {
        scan(&parse_nodes(inp))
            .into_iter()
            .map(|split| (split.kind, &inp[split.span]))
            .collect()
    }

    fn specifier(s: &str) -> SplitKind {
        SplitKind::StaticImportSpecifier(s.to_string())
    }

    #[test]
    fn test_scan_meta_url_references() {
        assert_eq!(
            splits("console.log(import.meta.url)"),
            vec![(SplitKind::MetaUrlRef, "import.meta.url")]
        );
        assert_eq!(
            splits("f(import.meta['url'], import.meta.resolve)"),
            vec![
                (SplitKind::MetaUrlRef, "import.meta['url']"),
                (SplitKind::MetaUrlRef, "import.meta.resolve")
            ]
        );
    }

    #[test]
    fn test_scan_inside_templates_and_groups() {
        assert_eq!(
            splits("if (a) { x = `at ${ import.meta.url }` }"),
            vec![(SplitKind::MetaUrlRef, "import.meta.url")]
        );
    }

    #[test]
    fn test_bare_meta_property_is_not_a_split() {
        assert!(splits("const meta = import.meta").is_empty());
    }

    #[test]
    fn test_scan_static_imports() {
        assert_eq!(
            splits("import a from './a.js'; import b from 'bare'; import '/c.js'"),
            vec![
                (specifier("./a.js"), "'./a.js'"),
                (specifier("/c.js"), "'/c.js'")
            ]
        );
    }

    #[test]
    fn test_dynamic_imports_are_not_splits() {
        assert!(splits("import('./a.js')").is_empty());
    }

    #[test]
    fn test_splits_are_in_source_order() {
        let found = scan(&parse_nodes(
            "import x from '../x.js'\nlog(import.meta.url, `${import.meta.url}`)",
        ));

        assert_eq!(found.len(), 3);
        assert!(found.windows(2).all(|w| w[0].span.end <= w[1].span.start));
    }
}
