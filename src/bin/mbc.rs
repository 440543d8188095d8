use clap::{Parser, Subcommand};
use module_blocks::cmd::{build, compile, shim};

#[derive(Parser, Debug)]
#[clap(
    version = "0.1",
    author = "David K.",
    about = "Compiles module blocks into plain JavaScript"
)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Compile(compile::Opts),
    Build(build::Opts),
    Shim(shim::Opts),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    match &opts.command {
        Command::Compile(opts) => compile::execute(opts),
        Command::Build(opts) => build::execute(opts),
        Command::Shim(opts) => shim::execute(opts),
    }
}
