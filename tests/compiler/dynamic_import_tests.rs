use crate::helpers::*;

#[test]
fn local_specifiers_are_resolved_at_the_call_site() {
    assert_compiles_to(
        "import('./a.js')",
        &format!("{}\nimport(new URL('./a.js', import.meta.url))", SHIM_IMPORT),
    );
    assert_compiles_to(
        "import(\"../b.js\").then(run)",
        &format!(
            "{}\nimport(new URL(\"../b.js\", import.meta.url)).then(run)",
            SHIM_IMPORT
        ),
    );
}

#[test]
fn other_arguments_go_through_fixup() {
    assert_compiles_to(
        "const { main } = await import(task)",
        &format!(
            "{}\nconst {{ main }} = await import(ModuleBlock.fixup(task))",
            SHIM_IMPORT
        ),
    );
    assert_compiles_to(
        "import('https://cdn.example.com/x.js')",
        &format!(
            "{}\nimport(ModuleBlock.fixup('https://cdn.example.com/x.js'))",
            SHIM_IMPORT
        ),
    );
}

#[test]
fn module_block_arguments() {
    let out = compile("import(module { })").unwrap();

    assert!(out.contains("import(ModuleBlock.fixup(new ModuleBlock(`"));
}

#[test]
fn imports_inside_arguments_are_rewritten_first() {
    let out = compile("import(pick(import('./a.js')))").unwrap();

    assert!(out.ends_with(
        "import(ModuleBlock.fixup(pick(import(new URL('./a.js', import.meta.url)))))"
    ));
}

#[test]
fn imports_inside_module_blocks() {
    let program = compile("module { import('./lazy.js'); import(other) }").unwrap();
    let body = instantiate(&program, CREATOR_URL).remove(0);

    // the base is filled in when the block is constructed
    assert!(body.contains("import(new URL('./lazy.js', \"https://example.com/app/main.js\"))"));
    assert!(body.contains("import(ModuleBlock.fixup(other))"));
}

#[test]
fn unsupported_forms_are_left_alone() {
    assert_compiles_to(
        "import('./a.json', { with: { type: 'json' } })",
        &format!(
            "{}\nimport('./a.json', {{ with: {{ type: 'json' }} }})",
            SHIM_IMPORT
        ),
    );
    assert_compiles_to("import()", &format!("{}\nimport()", SHIM_IMPORT));
}

#[test]
fn property_named_import_is_not_a_call_site() {
    assert_compiles_to(
        "loader.import('./a.js')",
        &format!("{}\nloader.import('./a.js')", SHIM_IMPORT),
    );
}
