use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the service layer and mapped to flash messages or
/// HTTP statuses by the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("record is still referenced")]
    InUse,
    #[error("{0}")]
    Form(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(_) => ServiceError::Conflict,
            RepositoryError::ConstraintViolation(_) => ServiceError::InUse,
            RepositoryError::MissingReference(_) => ServiceError::Form(
                "A linked record no longer exists. Reload the page and try again.".to_string(),
            ),
            RepositoryError::InvalidState(message) => ServiceError::Form(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
