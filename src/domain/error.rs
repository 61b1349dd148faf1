// src/domain/error.rs
use crate::domain::entry::EntryBuilderError;
use crate::domain::tagging::TaggingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry operation failed: {0}")]
    EntryOperationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Failed to serialize tag record: {0}")]
    SerializationError(String),

    #[error("Failed to deserialize tag record: {0}")]
    DeserializationError(String),

    #[error(transparent)]
    Tagging(#[from] TaggingError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Prefix the error message with additional context.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            DomainError::EntryOperationFailed(msg) => {
                DomainError::EntryOperationFailed(format!("{}: {}", context.into(), msg))
            }
            DomainError::RepositoryError(msg) => {
                DomainError::RepositoryError(format!("{}: {}", context.into(), msg))
            }
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}

impl From<EntryBuilderError> for DomainError {
    fn from(e: EntryBuilderError) -> Self {
        DomainError::EntryOperationFailed(e.to_string())
    }
}
