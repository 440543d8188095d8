use super::{HasOrigin, Origin, Source};

#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct StringSource(String);

impl StringSource {
    pub fn new<C: Into<String>>(content: C) -> Self {
        Self(content.into())
    }
}

impl HasOrigin for StringSource {
    fn origin(&self) -> Origin {
        Origin::Synthetic
    }
}

impl Source for StringSource {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize> {
        buf.push_str(&self.0);
        Ok(self.0.len())
    }
}
