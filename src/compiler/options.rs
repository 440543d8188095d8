/// Where compiled programs import the runtime shim from.
pub const DEFAULT_SHIM_SPECIFIER: &str = "/module-blocks-shim.js";

/// Name the runtime shim class is bound to in compiled programs.
pub const DEFAULT_RUNTIME_NAME: &str = "ModuleBlock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub shim_specifier: String,
    pub runtime_name: String,
}

impl Options {
    pub fn with_shim_specifier<S: Into<String>>(mut self, specifier: S) -> Self {
        self.shim_specifier = specifier.into();
        self
    }

    pub fn with_runtime_name<S: Into<String>>(mut self, name: S) -> Self {
        self.runtime_name = name.into();
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            shim_specifier: DEFAULT_SHIM_SPECIFIER.to_string(),
            runtime_name: DEFAULT_RUNTIME_NAME.to_string(),
        }
    }
}
