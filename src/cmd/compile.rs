use super::CompilerFlags;
use crate::compiler::source::{BufferSource, FileSource};
use crate::compiler::Compiler;
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    version = "0.1",
    author = "David K.",
    about = "Compile the program in <input>, or stdin, and print the result"
)]
pub struct Opts {
    input: Option<PathBuf>,

    /// Write the compiled program to this file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(flatten)]
    flags: CompilerFlags,
}

pub fn execute(opts: &Opts) -> anyhow::Result<()> {
    let mut compiler = Compiler::with_options(opts.flags.options());

    let result = match &opts.input {
        Some(path) => compiler.compile(&mut FileSource::open(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            compiler.compile(&mut BufferSource::new(text, "<stdin>"))
        }
    };

    let compiled = match result {
        Ok(compiled) => compiled,
        Err(e) => {
            compiler.print_error(&e);
            anyhow::bail!("compilation failed");
        }
    };

    match &opts.output {
        Some(path) => fs::write(path, compiled)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(compiled.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
