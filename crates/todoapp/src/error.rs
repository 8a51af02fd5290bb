use thiserror::Error;

/// Coarse classification of a [`TodoError`].
///
/// Transports translate kinds, not individual variants, into their own
/// vocabulary (HTTP status codes, exit codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing input.
    Validation,
    /// No record with the requested id.
    NotFound,
    /// I/O, parse, seed or any other unexpected failure.
    Internal,
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::Validation(_) => ErrorKind::Validation,
            TodoError::NotFound(_) => ErrorKind::NotFound,
            TodoError::Io(_)
            | TodoError::Serialization(_)
            | TodoError::Store(_)
            | TodoError::Seed(_)
            | TodoError::Config(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
