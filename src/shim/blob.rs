use super::{Error, Result};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub content_type: String,
    pub content: String,
}

impl Blob {
    pub fn new<T: Into<String>, C: Into<String>>(content_type: T, content: C) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
        }
    }
}

/// Capability to turn content into a reference that a module loader can fetch.
pub trait ObjectUrls {
    fn create_object_url(&self, blob: Blob) -> Result<String>;
}

/// In-memory object URL store handing out `blob:<origin>/<n>` URLs.
/// URLs are never revoked.
#[derive(Debug)]
pub struct BlobRegistry {
    origin: String,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    blobs: FxHashMap<String, Blob>,
    next_id: usize,
}

impl BlobRegistry {
    pub fn new<O: Into<String>>(origin: O) -> Self {
        Self {
            origin: origin.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn resolve(&self, url: &str) -> Option<Blob> {
        let inner = self.inner.lock().ok()?;
        inner.blobs.get(url).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.blobs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opaque origins serialize as `null`.
impl Default for BlobRegistry {
    fn default() -> Self {
        Self::new("null")
    }
}

impl ObjectUrls for BlobRegistry {
    fn create_object_url(&self, blob: Blob) -> Result<String> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| Error::Materialization("blob registry lock poisoned".to_string()))?;

        let url = format!("blob:{}/{}", self.origin, inner.next_id);
        inner.next_id += 1;
        inner.blobs.insert(url.clone(), blob);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let registry = BlobRegistry::new("https://example.com");
        let first = registry
            .create_object_url(Blob::new("text/javascript", "a"))
            .unwrap();
        let second = registry
            .create_object_url(Blob::new("text/javascript", "a"))
            .unwrap();

        assert_eq!(first, "blob:https://example.com/0");
        assert_ne!(first, second);
        assert_eq!(registry.resolve(&second).unwrap().content, "a");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_urls() {
        let registry = BlobRegistry::default();

        assert!(registry.is_empty());
        assert_eq!(registry.resolve("blob:null/0"), None);
    }
}
