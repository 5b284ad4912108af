use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the diesel-backed repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("duplicate record: {0}")]
    Conflict(String),
    /// A delete was rejected because other rows still reference the record.
    #[error("record is referenced elsewhere: {0}")]
    ConstraintViolation(String),
    /// An insert or update points at a row that does not exist.
    #[error("referenced record does not exist: {0}")]
    MissingReference(String),
    /// The row exists but is not in a state that allows the operation.
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("database error: {0}")]
    DatabaseError(DieselError),
    #[error("connection error: {0}")]
    ConnectionError(String),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::Conflict(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RepositoryError::MissingReference(info.message().to_string())
            }
            // SQLite reports some foreign key failures without an extended code.
            DieselError::DatabaseError(DatabaseErrorKind::Unknown, info)
                if info.message().contains(FOREIGN_KEY_FAILED) =>
            {
                RepositoryError::MissingReference(info.message().to_string())
            }
            other => RepositoryError::DatabaseError(other),
        }
    }
}

const FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";

/// Error mapping for `DELETE` statements: a foreign key failure there means
/// the row is still referenced, not that a reference is dangling.
pub fn still_referenced(err: DieselError) -> RepositoryError {
    match RepositoryError::from(err) {
        RepositoryError::MissingReference(message) => {
            RepositoryError::ConstraintViolation(message)
        }
        other => other,
    }
}

impl From<PoolError> for RepositoryError {
    fn from(value: PoolError) -> Self {
        RepositoryError::ConnectionError(value.to_string())
    }
}
