use super::CompilerFlags;
use crate::compiler::source::FileSource;
use crate::compiler::{Compiler, Options};
use crate::shim::javascript::{generate_shim, SHIM_FILE_NAME};
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(
    version = "0.1",
    author = "David K.",
    about = "Compile every script in <static-dir> into <out-dir>, copy everything else and add the runtime shim"
)]
pub struct Opts {
    static_dir: PathBuf,
    out_dir: PathBuf,

    #[clap(flatten)]
    flags: CompilerFlags,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub compiled: usize,
    pub copied: usize,
    pub shim: PathBuf,
}

pub fn execute(opts: &Opts) -> anyhow::Result<()> {
    let report = build(&opts.static_dir, &opts.out_dir, &opts.flags.options())?;

    log::info!(
        "compiled {} scripts, copied {} assets, wrote {}",
        report.compiled,
        report.copied,
        report.shim.display()
    );
    Ok(())
}

/// Mirrors `static_dir` into `out_dir`. The first script that fails to compile
/// aborts the build after its diagnostic was printed.
pub fn build(static_dir: &Path, out_dir: &Path, options: &Options) -> anyhow::Result<BuildReport> {
    let mut compiler = Compiler::with_options(options.clone());
    let mut report = BuildReport::default();

    build_dir(&mut compiler, static_dir, out_dir, &mut report)?;

    report.shim = out_dir.join(shim_file_name(&options.shim_specifier));
    fs::write(&report.shim, generate_shim(&options.runtime_name))
        .with_context(|| format!("failed to write {}", report.shim.display()))?;

    Ok(report)
}

fn build_dir(
    compiler: &mut Compiler,
    source_dir: &Path,
    target_dir: &Path,
    report: &mut BuildReport,
) -> anyhow::Result<()> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("failed to create {}", target_dir.display()))?;

    let mut entries = fs::read_dir(source_dir)
        .with_context(|| format!("failed to read {}", source_dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let target = target_dir.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            build_dir(compiler, &path, &target, report)?;
        } else if is_script(&path) {
            log::debug!("compiling {}", path.display());
            let compiled = match compiler.compile(&mut FileSource::open(&path)?) {
                Ok(compiled) => compiled,
                Err(e) => {
                    compiler.print_error(&e);
                    return Err(anyhow::Error::new(e)
                        .context(format!("failed to compile {}", path.display())));
                }
            };
            fs::write(&target, compiled)
                .with_context(|| format!("failed to write {}", target.display()))?;
            report.compiled += 1;
        } else {
            fs::copy(&path, &target)
                .with_context(|| format!("failed to copy {}", path.display()))?;
            report.copied += 1;
        }
    }

    Ok(())
}

fn is_script(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("js" | "mjs")
    )
}

/// The shim lands at the top of the output under the specifier's file name.
fn shim_file_name(specifier: &str) -> &str {
    Path::new(specifier)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(SHIM_FILE_NAME)
}
