use crate::compiler::source::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// A line terminator separated this node from the previous one.
    pub newline_before: bool,
}

/// Programs are kept as tokens and balanced groups. Only the constructs the compiler
/// rewrites get a node of their own, everything else is regenerated by the printer.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Word(String),
    Punct(&'static str),
    Number(String),
    Str(StringLiteral),
    Regex(String),
    Template(Template),
    Group(Group),
    /// `import.meta`
    MetaProperty,
    /// `import(...)`, the group holds the arguments
    ImportCall(Group),
    ImportDeclaration(ImportDeclaration),
    /// `module { ... }`, the group holds the body
    ModuleBlock(Group),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    /// The literal as written, quotes included
    pub raw: String,
    /// The cooked value with all escapes resolved
    pub value: String,
}

impl StringLiteral {
    pub fn new<R: Into<String>, V: Into<String>>(raw: R, value: V) -> Self {
        Self {
            raw: raw.into(),
            value: value.into(),
        }
    }

    /// Builds a double quoted literal for `value`.
    pub fn quoted<V: Into<String>>(value: V) -> Self {
        let value = value.into();
        let raw = serde_json::Value::from(value.as_str()).to_string();
        Self { raw, value }
    }
}

/// A template literal. `quasis` hold the raw text between substitutions,
/// so there is always exactly one more quasi than there are expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub quasis: Vec<String>,
    pub exprs: Vec<Vec<Node>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub fn open(&self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub delimiter: Delimiter,
    pub children: Vec<Node>,
    /// A line terminator precedes the closing delimiter.
    pub close_newline: bool,
}

impl Group {
    pub fn new(delimiter: Delimiter, children: Vec<Node>) -> Self {
        Self {
            delimiter,
            children,
            close_newline: false,
        }
    }
}

/// `import <clause> "<source>"`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    pub clause: Vec<Node>,
    pub source: StringLiteral,
    pub source_span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            newline_before: false,
        }
    }

    /// A node that doesn't originate from any source text.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self::new(kind, 0..0)
    }

    pub fn word<W: Into<String>>(word: W) -> Self {
        Self::synthetic(NodeKind::Word(word.into()))
    }

    pub fn punct(punct: &'static str) -> Self {
        Self::synthetic(NodeKind::Punct(punct))
    }

    pub fn group(delimiter: Delimiter, children: Vec<Node>) -> Self {
        Self::synthetic(NodeKind::Group(Group::new(delimiter, children)))
    }

    pub fn parens(children: Vec<Node>) -> Self {
        Self::group(Delimiter::Paren, children)
    }

    pub fn template(quasis: Vec<String>, exprs: Vec<Vec<Node>>) -> Self {
        Self::synthetic(NodeKind::Template(Template { quasis, exprs }))
    }

    pub fn meta_property() -> Self {
        Self::synthetic(NodeKind::MetaProperty)
    }

    pub fn import_declaration(clause: Vec<Node>, source: StringLiteral) -> Self {
        Self::synthetic(NodeKind::ImportDeclaration(ImportDeclaration {
            clause,
            source,
            source_span: 0..0,
        }))
    }

    pub fn with_newline(mut self, newline_before: bool) -> Self {
        self.newline_before = newline_before;
        self
    }

    pub fn is_punct(&self, punct: &str) -> bool {
        matches!(self.kind, NodeKind::Punct(p) if p == punct)
    }

    pub fn is_word(&self, word: &str) -> bool {
        matches!(&self.kind, NodeKind::Word(w) if w == word)
    }

    pub fn as_word(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Word(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match &self.kind {
            NodeKind::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_string_literal(&self) -> Option<&StringLiteral> {
        match &self.kind {
            NodeKind::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Reserved words after which the next token starts an expression.
/// Decides whether a `/` opens a regular expression.
pub const EXPRESSION_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
    "extends",
];

/// Words that are never the callee of a call or the tag of a template.
pub const KEYWORDS: &[&str] = &[
    "async",
    "await",
    "case",
    "catch",
    "class",
    "const",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "of",
    "return",
    "switch",
    "throw",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn precedes_expression(word: &str) -> bool {
    EXPRESSION_KEYWORDS.contains(&word)
}
