pub mod blob;
pub mod javascript;

pub use blob::{Blob, BlobRegistry, ObjectUrls};

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Mutex;
use thiserror::Error;

/// Property carrying the type tag of a cloned module block.
pub const KIND_PROPERTY: &str = "kind";

/// Tag identifying a cloned module block.
pub const MODULE_BLOCK_KIND: &str = "module-block";

pub const BODY_PROPERTY: &str = "body";

/// Content type of materialized module blocks.
pub const TEXT_JAVASCRIPT: &str = "text/javascript";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Materialization failed: {0}")]
    Materialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The clone encoding as read back by `fixup`. Tag and property names are the
/// constants above.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum Transfer {
    ModuleBlock { body: String },
}

/// Rust side of the runtime class compiled programs construct module blocks with.
#[derive(Debug)]
pub struct ModuleBlock {
    body: String,
    url: Mutex<Option<String>>,
}

impl ModuleBlock {
    /// Creating a module block doesn't allocate any loadable resource yet.
    pub fn new<B: Into<String>>(body: B) -> Self {
        Self {
            body: body.into(),
            url: Mutex::new(None),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Creates the loadable reference on first use and returns the same one afterwards,
    /// also when called from several threads at once.
    pub fn materialize(&self, urls: &dyn ObjectUrls) -> Result<String> {
        let mut url = self
            .url
            .lock()
            .map_err(|_| Error::Materialization("module block lock poisoned".to_string()))?;

        if let Some(url) = url.as_ref() {
            return Ok(url.clone());
        }

        let created = urls.create_object_url(Blob::new(TEXT_JAVASCRIPT, self.body.as_str()))?;
        log::debug!("materialized module block as {}", created);
        *url = Some(created.clone());
        Ok(created)
    }

    pub fn is_materialized(&self) -> bool {
        self.url.lock().map_or(false, |url| url.is_some())
    }

    /// Coercion to a primitive yields the loadable reference.
    pub fn to_primitive(&self, urls: &dyn ObjectUrls) -> Result<String> {
        self.materialize(urls)
    }

    /// What survives a structured clone: the tag and the body, nothing else.
    pub fn structured_clone(&self) -> Value {
        let mut clone = Map::new();
        clone.insert(KIND_PROPERTY.to_string(), Value::from(MODULE_BLOCK_KIND));
        clone.insert(BODY_PROPERTY.to_string(), Value::from(self.body.as_str()));
        Value::Object(clone)
    }

    /// Turns the clone of a module block back into a module block.
    /// Module blocks and every other value are returned unchanged.
    pub fn fixup(value: Transferable) -> Transferable {
        match value {
            Transferable::Data(data) => match Transfer::deserialize(&data) {
                Ok(Transfer::ModuleBlock { body }) => {
                    log::trace!("recovered module block from its clone");
                    Transferable::ModuleBlock(ModuleBlock::new(body))
                }
                Err(_) => Transferable::Data(data),
            },
            block => block,
        }
    }
}

impl fmt::Display for ModuleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module {{ {} }}", self.body)
    }
}

/// A value handed to `import(...)`, possibly after crossing a structured clone boundary.
#[derive(Debug)]
pub enum Transferable {
    ModuleBlock(ModuleBlock),
    Data(Value),
}

impl Transferable {
    pub fn as_module_block(&self) -> Option<&ModuleBlock> {
        match self {
            Transferable::ModuleBlock(block) => Some(block),
            Transferable::Data(_) => None,
        }
    }
}

impl From<ModuleBlock> for Transferable {
    fn from(block: ModuleBlock) -> Self {
        Transferable::ModuleBlock(block)
    }
}

impl From<Value> for Transferable {
    fn from(value: Value) -> Self {
        Transferable::Data(value)
    }
}
