use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

const USERNAME_MIN_LEN: u64 = 3;
const USERNAME_MAX_LEN: u64 = 64;
const PASSWORD_MIN_LEN: u64 = 8;
const PASSWORD_MAX_LEN: u64 = 256;

pub type UserFormResult<T> = Result<T, UserFormError>;

#[derive(Debug, Error)]
pub enum UserFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("username may only contain letters, digits, `.`, `_` and `-`")]
    InvalidUsername,
}

/// Login account created for an existing employee.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserForm {
    #[validate(range(min = 1))]
    pub employee_id: i32,
    #[validate(length(min = USERNAME_MIN_LEN, max = USERNAME_MAX_LEN))]
    pub username: String,
    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: String,
}

/// Validated account request; the password is still plain text and must
/// be hashed before it is stored.
#[derive(Debug)]
pub struct UserRegistration {
    pub employee_id: i32,
    pub username: String,
    pub password: String,
}

impl CreateUserForm {
    pub fn into_registration(self) -> UserFormResult<UserRegistration> {
        self.validate()?;

        let username = self.username.trim().to_lowercase();
        let allowed = |ch: char| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-');
        if username.is_empty() || !username.chars().all(allowed) {
            return Err(UserFormError::InvalidUsername);
        }

        Ok(UserRegistration {
            employee_id: self.employee_id,
            username,
            password: self.password,
        })
    }
}
