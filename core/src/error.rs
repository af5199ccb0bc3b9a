use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LseError {
    /// A document or the noise-word file could not be opened or read.
    #[error("resource not found: {path}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The scanner has no document under this identifier.
    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

pub type Result<T> = std::result::Result<T, LseError>;

impl LseError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LseError::ResourceNotFound { path: path.into(), source }
    }
}
