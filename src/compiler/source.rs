pub mod buffer;
pub mod file;
pub mod location;
pub mod origin;
pub mod registry;
pub mod string;

pub use buffer::BufferSource;
pub use file::FileSource;
pub use location::{HasSourceLocation, Location};
pub use origin::{HasOrigin, Origin};
pub use registry::Registry;
pub use string::StringSource;

/// Byte offsets into the text of a single source.
pub type Span = std::ops::Range<usize>;

/// Anything the compiler can read program text from.
pub trait Source: HasOrigin {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub(crate) usize);

impl SourceId {
    /// An id that is not backed by any registered source.
    pub fn synthetic() -> Self {
        Self(usize::MAX)
    }

    pub fn is_synthetic(&self) -> bool {
        self.0 == usize::MAX
    }

    pub fn location(&self, span: Span) -> Location {
        Location::new(*self, span)
    }
}
