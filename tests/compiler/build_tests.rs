use crate::helpers::*;
use module_blocks::cmd::build::build;
use module_blocks::compiler::Options;
use std::fs;

#[test]
fn build_static_directory() {
    let scratch = scratch_dir("build");
    let out = scratch.path();
    let report = build(&fixture("static"), out, &Options::default()).unwrap();

    assert_eq!(report.compiled, 5);
    assert_eq!(report.copied, 1);
    assert_eq!(report.shim, out.join("module-blocks-shim.js"));

    let main = fs::read_to_string(out.join("main.js")).unwrap();
    assert!(main.starts_with(SHIM_IMPORT));
    assert!(main.contains("import(ModuleBlock.fixup(greeting))"));
    assert!(!main.contains("module {"));

    let worker = fs::read_to_string(out.join("worker/main.mjs")).unwrap();
    assert_eq!(worker.matches("new ModuleBlock(").count(), 2);

    assert_eq!(
        fs::read_to_string(out.join("index.html")).unwrap(),
        fs::read_to_string(fixture("static/index.html")).unwrap()
    );

    let shim = fs::read_to_string(&report.shim).unwrap();
    assert!(shim.contains("export class ModuleBlock"));
}

#[test]
fn built_scripts_are_stable() {
    let first_dir = scratch_dir("build-first");
    let second_dir = scratch_dir("build-second");
    let (first, second) = (first_dir.path(), second_dir.path());

    build(&fixture("static"), first, &Options::default()).unwrap();
    build(first, second, &Options::default()).unwrap();

    for script in ["main.js", "lazy.js", "pool/pool.js", "worker/main.mjs"] {
        assert_eq!(
            fs::read_to_string(first.join(script)).unwrap(),
            fs::read_to_string(second.join(script)).unwrap(),
            "{} changed when compiled again",
            script
        );
    }
}

#[test]
fn build_with_custom_shim() {
    let scratch = scratch_dir("build-custom");
    let out = scratch.path();
    let options = Options::default()
        .with_shim_specifier("/vendor/runtime.js")
        .with_runtime_name("Block");
    let report = build(&fixture("static"), out, &options).unwrap();

    assert_eq!(report.shim, out.join("runtime.js"));
    assert!(fs::read_to_string(&report.shim)
        .unwrap()
        .contains("export class Block"));
    assert!(fs::read_to_string(out.join("utils.js"))
        .unwrap()
        .starts_with("import { Block } from \"/vendor/runtime.js\";"));
}

#[test]
fn build_aborts_on_compile_errors() {
    let scratch = scratch_dir("build-broken");
    let error = build(&fixture("broken"), scratch.path(), &Options::default()).unwrap_err();

    assert!(error.to_string().contains("broken.js"));
    assert_matches!(
        error.downcast_ref::<Error>(),
        Some(Error::FrontendError(_))
    );
}

#[test]
fn build_output_is_removed_with_its_scratch_directory() {
    let scratch = scratch_dir("build-cleanup");
    let out = scratch.path().to_path_buf();
    build(&fixture("static"), &out, &Options::default()).unwrap();
    assert!(out.join("main.js").exists());

    scratch.close().unwrap();

    assert!(!out.exists());
}
