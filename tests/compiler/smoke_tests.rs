use crate::helpers::*;
use module_blocks::compiler::frontend::error::Error as FrontendError;
use module_blocks::compiler::{Compiler, Options};

#[test]
fn program_without_module_blocks() {
    assert_compiles_to("let a = 1;", &format!("{}\nlet a = 1;", SHIM_IMPORT));
}

#[test]
fn empty_program() {
    assert_compiles_to("", SHIM_IMPORT);
    assert_compiles_to("// nothing but a comment\n", SHIM_IMPORT);
}

#[test]
fn module_block_without_context_dependent_code() {
    let out = compile("const m = module { export default 42 };").unwrap();

    assert_eq!(
        out,
        [
            SHIM_IMPORT,
            "\nconst m = new ModuleBlock(`import { ModuleBlock } from ",
            "${JSON.stringify(new URL(\"/module-blocks-shim.js\", import.meta.url))};",
            "\nexport default 42`);"
        ]
        .concat()
    );
}

#[test]
fn module_block_text_is_preserved() {
    let program = compile(
        r#"const m = module {
  const re = /\d+`${1}/g
  const s = "back\\slash `tick` ${not a substitution}"
  export const t = `tpl ${s} \` done`
}"#,
    )
    .unwrap();
    let body = instantiate(&program, CREATOR_URL).remove(0);

    assert!(body.contains(r#"const re = /\d+`${1}/g"#));
    assert!(body.contains(r#"const s = "back\\slash `tick` ${not a substitution}""#));
    assert!(body.contains(r#"export const t = `tpl ${s} \` done`"#));
}

#[test]
fn meta_url_is_taken_from_the_creator() {
    let program = compile("const m = module { console.log(import.meta.url, import.meta['url']) }").unwrap();
    let body = instantiate(&program, CREATOR_URL).remove(0);

    assert!(body.ends_with(&format!(
        "console.log(\"{}\", \"{}\")",
        CREATOR_URL, CREATOR_URL
    )));
}

#[test]
fn static_imports_are_resolved_against_the_creator() {
    let program = compile(
        "const m = module { import a from './a.js'; import b from '../lib/b.js'; import c from 'bare' }",
    )
    .unwrap();
    let body = instantiate(&program, CREATOR_URL).remove(0);

    assert!(body.starts_with(
        "import { ModuleBlock } from \"https://example.com/module-blocks-shim.js\";"
    ));
    assert!(body.contains("import a from \"https://example.com/app/a.js\";"));
    assert!(body.contains("import b from \"https://example.com/lib/b.js\";"));
    assert!(body.contains("import c from 'bare'"));
}

#[test]
fn module_as_identifier_is_untouched() {
    let out = compile("module.exports = { module: 1 };\nconst x = module\n{}").unwrap();

    assert_eq!(
        out,
        format!(
            "{}\nmodule.exports = {{ module: 1 }};\nconst x = module\n{{}}",
            SHIM_IMPORT
        )
    );
}

#[test]
fn compiling_twice_is_stable() {
    let sources = vec![
        "const m = module { import('./x.js') }; import(m)",
        "f(module { module { import.meta.url } })",
        "import { ModuleBlock } from \"/module-blocks-shim.js\";\nimport(x)",
    ];

    for source in sources {
        let once = compile(source).unwrap();
        assert_eq!(compile(&once).unwrap(), once, "unstable for {:?}", source);
    }
}

#[test]
fn custom_options() {
    let options = Options::default()
        .with_shim_specifier("./runtime/shim.js")
        .with_runtime_name("MB");
    let out = compile_with(options, "import(module { })").unwrap();

    assert!(out.starts_with("import { MB } from \"./runtime/shim.js\";\n"));
    assert!(out.contains("import(MB.fixup(new MB(`import { MB } from ${JSON.stringify(new URL(\"./runtime/shim.js\", import.meta.url))};`)))"));
}

#[test]
fn parse_errors() {
    assert_matches!(
        compile("const m = module { f(] }"),
        Err(Error::FrontendError(FrontendError::ParseError(_, _, _)))
    );
    assert_matches!(
        compile("const m = module { f("),
        Err(Error::FrontendError(FrontendError::IncompleteInput(_, _)))
    );
    assert_matches!(
        compile("import { a } from;"),
        Err(Error::FrontendError(FrontendError::ParseError(_, _, _)))
    );
}

#[test]
fn regex_after_statement_heads_is_preserved() {
    let program = compile("const m = module { while (m = /a b/g.exec(s)) {} if (ok) /a b/.test(s) }").unwrap();
    let body = instantiate(&program, CREATOR_URL).remove(0);

    assert!(body.ends_with("while (m = /a b/g.exec(s)) {} if (ok) /a b/.test(s)"));
}

#[test]
fn compiling_identical_input_is_deterministic() {
    let source = "const outer = module {\n  import a from './a.js'\n  const inner = module { import(import.meta.url + '/x.js') }\n}\nimport(outer)";

    let first = compile(source).unwrap();
    let second = compile(source).unwrap();
    assert_eq!(first, second);

    let mut compiler = Compiler::new();
    let reused_first = compiler.compile_str(source).unwrap();
    let registered = compiler.registry().len();
    let reused_second = compiler.compile_str(source).unwrap();

    assert!(compiler.registry().len() > registered);
    assert_eq!(reused_first, first);
    assert_eq!(reused_second, first);
}
