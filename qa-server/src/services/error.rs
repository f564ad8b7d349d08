//! Domain-level outcomes returned by the service layer

use crate::db::StoreError;
use crate::models::ValidationError;

/// Service error type
///
/// Every variant except `Store` is an expected outcome of a well-formed
/// request; handlers switch on the variant, never on the message.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Parent question missing while creating an answer
    #[error("question '{id}' not found")]
    QuestionNotFound { id: i64 },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
