use super::{HasOrigin, Origin, Source};

/// In-memory source with a user supplied label, e.g. a file that was read elsewhere.
#[derive(Clone, Debug)]
pub struct BufferSource {
    content: String,
    name: String,
}

impl BufferSource {
    pub fn new<L: Into<String>, C: Into<String>>(content: C, label: L) -> Self {
        Self {
            content: content.into(),
            name: label.into(),
        }
    }
}

impl HasOrigin for BufferSource {
    fn origin(&self) -> Origin {
        Origin::Buffer(self.name.clone())
    }
}

impl Source for BufferSource {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize> {
        buf.push_str(&self.content);
        Ok(self.content.len())
    }
}
