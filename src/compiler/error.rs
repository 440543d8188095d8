pub mod reporting;
use crate::compiler::frontend;
use crate::compiler::frontend::error::Detail;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    FrontendError(#[from] frontend::error::Error),

    /// Split offsets that don't fit the text they were computed for
    #[error("InternalConsistency: {0}")]
    InternalConsistency(String, Detail),
}

impl Error {
    pub fn internal_consistency<M: Into<String>>(message: M, detail: Detail) -> Self {
        Error::InternalConsistency(message.into(), detail)
    }
}
