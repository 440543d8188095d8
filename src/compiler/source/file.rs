use super::{HasOrigin, Origin, Source};
use std::path::{Path, PathBuf};

pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    /// Fails early when the file doesn't exist so that commands can report
    /// the path before any compilation starts.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        std::fs::metadata(&path)?;
        Ok(Self { path })
    }
}

impl HasOrigin for FileSource {
    fn origin(&self) -> Origin {
        Origin::File(self.path.clone())
    }
}

impl Source for FileSource {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize> {
        let content = std::fs::read_to_string(&self.path)?;
        buf.push_str(&content);
        Ok(content.len())
    }
}
