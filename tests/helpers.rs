#![allow(dead_code)]

use module_blocks::compiler::frontend::syntax::{Delimiter, Node, NodeKind, Template};
use module_blocks::compiler::frontend::{self, generate};
use module_blocks::compiler::source::SourceId;
use module_blocks::compiler::{Compiler, Options};
pub use module_blocks::compiler::Error;
pub use module_blocks::compiler::Result;
pub use matches::assert_matches;
pub use tempfile::TempDir;

pub const SHIM_IMPORT: &str = "import { ModuleBlock } from \"/module-blocks-shim.js\";";

pub const CREATOR_URL: &str = "https://example.com/app/main.js";

pub fn compile(code: &str) -> Result<String> {
    Compiler::new().compile_str(code)
}

pub fn compile_with(options: Options, code: &str) -> Result<String> {
    Compiler::with_options(options).compile_str(code)
}

pub fn assert_compiles_to(code: &str, expected: &str) {
    assert_eq!(compile(code).unwrap(), expected)
}

/// Body texts of every module block constructed by `program` when it runs at `creator_url`,
/// in source order. Only the substitutions the compiler generates are understood.
pub fn instantiate(program: &str, creator_url: &str) -> Vec<String> {
    let tree = frontend::parse(program, SourceId::synthetic()).unwrap();
    let mut bodies = Vec::new();
    collect_bodies(&tree.body, creator_url, &mut bodies);
    bodies
}

fn collect_bodies(nodes: &[Node], creator_url: &str, bodies: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        if let Some(template) = artifact_template(&nodes[i..]) {
            bodies.push(evaluate_template(template, creator_url));
            continue;
        }
        match &node.kind {
            NodeKind::Group(g) | NodeKind::ImportCall(g) => {
                collect_bodies(&g.children, creator_url, bodies)
            }
            _ => (),
        }
    }
}

/// `new ModuleBlock(`...`)`
fn artifact_template(nodes: &[Node]) -> Option<&Template> {
    match nodes {
        [new, runtime, args, ..] if new.is_word("new") && runtime.is_word("ModuleBlock") => {
            match args.as_group() {
                Some(g) if g.delimiter == Delimiter::Paren => match g.children.as_slice() {
                    [Node {
                        kind: NodeKind::Template(t),
                        ..
                    }] => Some(t),
                    _ => None,
                },
                _ => None,
            }
        }
        _ => None,
    }
}

fn evaluate_template(template: &Template, creator_url: &str) -> String {
    let mut out = String::new();
    for (i, quasi) in template.quasis.iter().enumerate() {
        out.push_str(&cook(quasi));
        if let Some(expr) = template.exprs.get(i) {
            out.push_str(&evaluate(expr, creator_url));
        }
    }
    out
}

fn cook(raw: &str) -> String {
    let mut out = String::new();
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    out
}

fn evaluate(expr: &[Node], creator_url: &str) -> String {
    match expr {
        [json, _, stringify, args] if json.is_word("JSON") && stringify.is_word("stringify") => {
            let value = evaluate(&args.as_group().unwrap().children, creator_url);
            serde_json::Value::from(value).to_string()
        }
        [meta, _, url] if meta.kind == NodeKind::MetaProperty && url.is_word("url") => {
            creator_url.to_string()
        }
        [new, url, args] if new.is_word("new") && url.is_word("URL") => {
            let children = &args.as_group().unwrap().children;
            let specifier = evaluate(&children[..1], creator_url);
            let base = evaluate(&children[2..], creator_url);
            resolve(&specifier, &base)
        }
        [node] => match node.as_string_literal() {
            Some(literal) => literal.value.clone(),
            None => panic!("can't evaluate {}", generate(expr)),
        },
        _ => panic!("can't evaluate {}", generate(expr)),
    }
}

fn resolve(specifier: &str, base: &str) -> String {
    let (scheme, rest) = base.split_once("://").unwrap();
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    let origin = format!("{}://{}", scheme, host);

    if let Some(absolute) = specifier.strip_prefix('/') {
        return format!("{}/{}", origin, absolute);
    }

    let mut segments: Vec<&str> = path.split('/').collect();
    segments.pop();
    for part in specifier.split('/') {
        match part {
            "." => (),
            ".." => {
                segments.pop();
            }
            part => segments.push(part),
        }
    }
    format!("{}/{}", origin, segments.join("/"))
}

/// A fresh, empty directory that is removed when the guard is dropped.
pub fn scratch_dir(name: &str) -> TempDir {
    tempfile::Builder::new()
        .prefix(&format!("module-blocks-{}-", name))
        .tempdir()
        .expect("scratch directory should be created")
}

pub fn fixture(path: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(path)
}
