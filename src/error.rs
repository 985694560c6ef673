use crate::validation::HTTPValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request validation failed: {0}")]
    Validation(HTTPValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<HTTPValidationError> for Error {
    fn from(err: HTTPValidationError) -> Self {
        Self::Validation(err)
    }
}

impl Error {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
