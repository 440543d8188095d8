pub mod build;
pub mod compile;
pub mod shim;

use crate::compiler::options::{DEFAULT_RUNTIME_NAME, DEFAULT_SHIM_SPECIFIER};
use crate::compiler::Options;
use clap::Args;

/// Flags shared by every command that compiles programs.
#[derive(Args, Debug, Clone)]
pub struct CompilerFlags {
    /// Specifier compiled programs import the runtime shim from
    #[clap(long = "shim", default_value = DEFAULT_SHIM_SPECIFIER)]
    pub shim_specifier: String,

    /// Name the runtime class is imported as
    #[clap(long, default_value = DEFAULT_RUNTIME_NAME)]
    pub runtime_name: String,
}

impl CompilerFlags {
    pub fn options(&self) -> Options {
        Options::default()
            .with_shim_specifier(self.shim_specifier.as_str())
            .with_runtime_name(self.runtime_name.as_str())
    }
}
