use chrono::NaiveDateTime;
use serde::Serialize;

/// Login account listed on the user management page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserAccount {
    pub id: i32,
    pub username: String,
    pub employee_id: i32,
    pub employee_name: String,
    pub role_name: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Everything needed to verify a login attempt and build the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub user_id: i32,
    pub username: String,
    pub password_hash: String,
    pub employee_id: i32,
    pub employee_name: String,
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub employee_id: i32,
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    /// Usernames are stored lower-cased so logins are case-insensitive.
    #[must_use]
    pub fn new(employee_id: i32, username: &str, password_hash: String) -> Self {
        Self {
            employee_id,
            username: username.trim().to_lowercase(),
            password_hash,
        }
    }
}
