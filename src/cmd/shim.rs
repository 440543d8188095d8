use crate::compiler::options::DEFAULT_RUNTIME_NAME;
use crate::shim::javascript::generate_shim;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    version = "0.1",
    author = "David K.",
    about = "Print the runtime shim module"
)]
pub struct Opts {
    /// Name the runtime class is exported as
    #[clap(long, default_value = DEFAULT_RUNTIME_NAME)]
    runtime_name: String,

    /// Write the shim to this file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

pub fn execute(opts: &Opts) -> anyhow::Result<()> {
    let shim = generate_shim(&opts.runtime_name);

    match &opts.output {
        Some(path) => fs::write(path, shim)?,
        None => io::stdout().write_all(shim.as_bytes())?,
    }

    Ok(())
}
