use crate::compiler::source::{Location, SourceId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown source {0:?}")]
    UnknownSource(SourceId),
    #[error("Incomplete Input: {0}")]
    IncompleteInput(String, Detail),
    #[error("ParseError: {0}")]
    ParseError(String, Detail, Vec<Detail>),
    #[error("Bug: {0}")]
    Bug(String),
}

impl Error {
    pub fn incomplete_input<M: Into<String>>(message: M, detail: Detail) -> Self {
        Error::IncompleteInput(message.into(), detail)
    }

    pub fn parse_error<M: Into<String>, More: Into<Vec<Detail>>>(
        m: M,
        detail: Detail,
        details: More,
    ) -> Self {
        Error::ParseError(m.into(), detail, details.into())
    }

    pub fn bug<M: Into<String>>(message: M) -> Self {
        Error::Bug(message.into())
    }

    /// The location the error points at, if any.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::IncompleteInput(_, detail) | Error::ParseError(_, detail, _) => {
                Some(&detail.location)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub content: String,
    pub location: Location,
}

impl Detail {
    pub fn new<Content: Into<String>, Loc: Into<Location>>(m: Content, loc: Loc) -> Self {
        Self {
            content: m.into(),
            location: loc.into(),
        }
    }
}
