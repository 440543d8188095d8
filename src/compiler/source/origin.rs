use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    Synthetic,
    Buffer(String),
    File(std::path::PathBuf),
    /// Text regenerated from the body of a module block.
    ModuleBlock,
}

impl fmt::Display for Origin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Synthetic => formatter.write_str("<synthetic>"),
            Origin::Buffer(name) => formatter.write_str(name),
            Origin::File(path) => write!(formatter, "{}", path.display()),
            Origin::ModuleBlock => formatter.write_str("<module block>"),
        }
    }
}

pub trait HasOrigin {
    fn origin(&self) -> Origin;
}
