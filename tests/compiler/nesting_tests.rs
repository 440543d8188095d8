use crate::helpers::*;

#[test]
fn inner_block_sees_outermost_creator() {
    let program = compile(
        "const outer = module {\n  const inner = module { console.log(import.meta.url) }\n}",
    )
    .unwrap();

    let outer_body = instantiate(&program, CREATOR_URL).remove(0);
    // the outer block runs from wherever it was materialized
    let inner_body = instantiate(&outer_body, "https://cdn.example.org/blocks/outer.js").remove(0);

    assert!(inner_body.ends_with(&format!("console.log(\"{}\")", CREATOR_URL)));
    assert!(inner_body.starts_with(
        "import { ModuleBlock } from \"https://example.com/module-blocks-shim.js\";"
    ));
}

#[test]
fn inner_static_imports_resolve_against_outermost_creator() {
    let program = compile(
        "const outer = module { const inner = module { import { x } from './x.js'; x() } }",
    )
    .unwrap();

    let outer_body = instantiate(&program, CREATOR_URL).remove(0);
    let inner_body = instantiate(&outer_body, "https://elsewhere.org/o.js").remove(0);

    assert!(inner_body.contains("import { x } from \"https://example.com/app/x.js\";"));
}

#[test]
fn three_levels() {
    let program = compile("module { module { module { import.meta.url } } }").unwrap();

    let first = instantiate(&program, CREATOR_URL).remove(0);
    let second = instantiate(&first, "https://a.org/1.js").remove(0);
    let third = instantiate(&second, "https://b.org/2.js").remove(0);

    assert!(third.ends_with(&format!("\"{}\"", CREATOR_URL)));
}

#[test]
fn sibling_blocks_are_compiled_independently() {
    let program = compile(
        "const a = module { import.meta.url }\nconst b = module { import.meta.url }",
    )
    .unwrap();
    let bodies = instantiate(&program, CREATOR_URL);

    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0], bodies[1]);
}

#[test]
fn nested_template_escapes_survive() {
    let program = compile("module { module { const t = `a${`b`}\\`` } }").unwrap();

    let outer = instantiate(&program, CREATOR_URL).remove(0);
    let inner = instantiate(&outer, CREATOR_URL).remove(0);

    assert!(inner.ends_with("const t = `a${`b`}\\``"));
}
