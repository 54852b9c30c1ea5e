use thiserror::Error;

/// Error kinds surfaced by the service and repository layers.
///
/// Each layer either handles an error itself or forwards it unchanged; the
/// HTTP handlers are the only place these are turned into status codes.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing input, caught before the store is reached.
    #[error("{0}")]
    Validation(String),
    /// No matching non-deleted record.
    #[error("todo {0} not found")]
    NotFound(i64),
    /// Store or connection failure.
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
