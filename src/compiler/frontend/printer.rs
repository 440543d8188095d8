use super::syntax::{
    is_keyword, Delimiter, Group, ImportDeclaration, Node, NodeKind, Program, Template,
};

const INDENT: &str = "  ";

pub fn generate_program(program: &Program) -> String {
    generate(&program.body)
}

/// Prints `nodes` as canonical text. Recorded line breaks are kept, so automatic
/// semicolon insertion reads the output like the input.
pub fn generate(nodes: &[Node]) -> String {
    let mut printer = Printer::new();
    printer.print_sequence(nodes);
    printer.finish()
}

#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn print_sequence(&mut self, nodes: &[Node]) {
        for (i, node) in nodes.iter().enumerate() {
            if node.newline_before && !self.out.is_empty() {
                self.newline();
            } else if i > 0 {
                let is_property = i > 1 && is_member_access(&nodes[i - 2]);
                if needs_space(&nodes[i - 1], node, is_property) {
                    self.out.push(' ');
                }
            }
            self.print_node(node);
        }
    }

    pub fn print_node(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::Word(text) | NodeKind::Number(text) | NodeKind::Regex(text) => {
                self.out.push_str(text)
            }
            NodeKind::Punct(punct) => self.out.push_str(punct),
            NodeKind::Str(literal) => self.out.push_str(&literal.raw),
            NodeKind::Template(template) => self.print_template(template),
            NodeKind::Group(group) => self.print_group(group),
            NodeKind::MetaProperty => self.out.push_str("import.meta"),
            NodeKind::ImportCall(arguments) => {
                self.out.push_str("import");
                self.print_group(arguments);
            }
            NodeKind::ImportDeclaration(declaration) => self.print_import_declaration(declaration),
            NodeKind::ModuleBlock(body) => {
                self.out.push_str("module ");
                self.print_group(body);
            }
        }
    }

    fn print_group(&mut self, group: &Group) {
        let padded = group.delimiter == Delimiter::Brace && !group.children.is_empty();

        self.out.push(group.delimiter.open());
        self.depth += 1;
        if padded && !group.children[0].newline_before {
            self.out.push(' ');
        }
        self.print_sequence(&group.children);
        self.depth -= 1;

        if group.close_newline {
            self.newline();
        } else if padded {
            self.out.push(' ');
        }
        self.out.push(group.delimiter.close());
    }

    fn print_template(&mut self, template: &Template) {
        self.out.push('`');
        for (i, quasi) in template.quasis.iter().enumerate() {
            self.out.push_str(quasi);
            if let Some(expr) = template.exprs.get(i) {
                self.out.push_str("${");
                self.print_sequence(expr);
                self.out.push('}');
            }
        }
        self.out.push('`');
    }

    fn print_import_declaration(&mut self, declaration: &ImportDeclaration) {
        self.out.push_str("import");
        if !declaration.clause.is_empty() {
            self.out.push(' ');
            self.print_sequence(&declaration.clause);
        }
        self.out.push(' ');
        self.out.push_str(&declaration.source.raw);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }
}

fn is_member_access(node: &Node) -> bool {
    node.is_punct(".") || node.is_punct("?.")
}

/// `is_property` tells that `prev` is a property name, `promise.catch(f)` is a call.
fn needs_space(prev: &Node, next: &Node, is_property: bool) -> bool {
    let next_is_access = next.as_group().map_or(false, |g| {
        matches!(g.delimiter, Delimiter::Paren | Delimiter::Bracket)
    });

    match (&prev.kind, &next.kind) {
        (_, NodeKind::Punct("," | ";" | ":")) => false,
        // `1.toString` would read as a malformed number
        (NodeKind::Number(n), NodeKind::Punct("." | "?.")) => !n.contains('.'),
        (_, NodeKind::Punct("." | "?.")) => false,
        (NodeKind::Punct("." | "?." | "..."), _) => false,
        (NodeKind::Punct("!" | "~"), next) => matches!(next, NodeKind::Punct(_)),
        (NodeKind::Word(w), NodeKind::Template(_)) => is_keyword(w) && !is_property,
        (NodeKind::Word(w), _) if next_is_access => is_keyword(w) && !is_property,
        (NodeKind::Group(g), _) if next_is_access => g.delimiter == Delimiter::Brace,
        (
            NodeKind::Str(_) | NodeKind::Template(_) | NodeKind::ImportCall(_) | NodeKind::MetaProperty,
            _,
        ) => !next_is_access,
        _ => true,
    }
}
