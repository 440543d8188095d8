use super::splice::{SplicePlan, Substitution};
use crate::compiler::frontend::syntax::Node;

/// `new <runtime>(`<literal>${<substitution>}<literal>...`)`
///
/// The template is evaluated where the module block is created, so substitutions
/// see the creator's `import.meta`.
pub fn build_artifact(plan: &SplicePlan, runtime_name: &str) -> Vec<Node> {
    let quasis = plan
        .literals
        .iter()
        .map(|literal| escape_template_raw(literal))
        .collect();
    let exprs = plan.substitutions.iter().map(Substitution::to_nodes).collect();

    vec![
        Node::word("new"),
        Node::word(runtime_name),
        Node::parens(vec![Node::template(quasis, exprs)]),
    ]
}

/// Escapes `text` so that a template literal containing it cooks back to `text`.
pub fn escape_template_raw(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' | '`' => {
                out.push('\\');
                out.push(c);
            }
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}
