use super::{Origin, Source, SourceId};
use codespan_reporting::files;
use std::ops::Range;

/// Keeps the text of every compiled source around so diagnostics can point into it.
#[derive(Debug)]
pub struct Registry {
    sources: files::SimpleFiles<Origin, String>,
    count: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            sources: files::SimpleFiles::new(),
            count: 0,
        }
    }

    pub fn add<T: Source>(&mut self, s: &mut T) -> std::io::Result<SourceId> {
        let mut out = String::new();
        s.read_to_string(&mut out)?;
        Ok(self.add_text(s.origin(), out))
    }

    pub fn add_text<T: Into<String>>(&mut self, origin: Origin, text: T) -> SourceId {
        self.count += 1;
        SourceId(self.sources.add(origin, text.into()))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn text(&self, id: SourceId) -> Option<&str> {
        self.sources
            .get(id.0)
            .ok()
            .map(|file| file.source().as_str())
    }

    pub fn origin(&self, id: SourceId) -> Option<&Origin> {
        self.sources.get(id.0).ok().map(|file| file.name())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> files::Files<'a> for Registry {
    type FileId = SourceId;
    type Name = Origin;
    type Source = &'a str;

    fn name(&'a self, id: Self::FileId) -> Result<Self::Name, files::Error> {
        self.sources.name(id.0)
    }

    fn source(&'a self, id: Self::FileId) -> Result<Self::Source, files::Error> {
        self.sources.source(id.0)
    }

    fn line_index(&'a self, id: Self::FileId, byte_index: usize) -> Result<usize, files::Error> {
        self.sources.line_index(id.0, byte_index)
    }

    fn line_range(
        &'a self,
        id: Self::FileId,
        line_index: usize,
    ) -> Result<Range<usize>, files::Error> {
        self.sources.line_range(id.0, line_index)
    }
}
