use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use validator::Validate;

use crate::domain::audit::{AuditAction, AuditEntity, NewAuditEntry};
use crate::domain::auth::AuthenticatedUser;
use crate::forms::auth::LoginForm;
use crate::repository::{AuditWriter, UserReader};
use crate::services::{ServiceError, ServiceResult};

/// Hash a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ServiceError::Internal(format!("failed to hash password: {err}")))
}

/// Check a password against a stored PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> ServiceResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| ServiceError::Internal(format!("invalid password hash: {err}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(ServiceError::Internal(format!(
            "password verification failed: {err}"
        ))),
    }
}

/// Verify credentials and build the session payload.
///
/// Unknown usernames and wrong passwords both yield `Unauthorized`.
pub fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + AuditWriter + ?Sized,
{
    form.validate().map_err(|_| ServiceError::Unauthorized)?;

    let username = form.normalized_username();
    let credentials = repo
        .get_user_credentials(&username)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&form.password, &credentials.password_hash)? {
        log::info!("Rejected login for {username}");
        return Err(ServiceError::Unauthorized);
    }

    let entry = NewAuditEntry::new(AuditEntity::User, credentials.user_id, AuditAction::Login)
        .by(credentials.user_id)
        .details(format!("User {} logged in", credentials.username));
    if let Err(err) = repo.record_audit(&entry) {
        log::error!("Failed to record login of {}: {err}", credentials.username);
    }

    Ok(AuthenticatedUser {
        user_id: credentials.user_id,
        username: credentials.username,
        employee_id: credentials.employee_id,
        name: credentials.employee_name,
        role: credentials.role_name,
    })
}

/// Record the logout; the caller clears the session.
pub fn logout<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<()>
where
    R: AuditWriter + ?Sized,
{
    let entry = NewAuditEntry::new(AuditEntity::User, user.user_id, AuditAction::Logout)
        .by(user.user_id)
        .details(format!("User {} logged out", user.username));
    repo.record_audit(&entry).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserCredentials;
    use crate::services::test_support::FakeRepo;

    fn credentials(password: &str) -> UserCredentials {
        UserCredentials {
            user_id: 3,
            username: "plant.manager".to_string(),
            password_hash: hash_password(password).expect("hash"),
            employee_id: 9,
            employee_name: "Meera Iyer".to_string(),
            role_name: Some("Administrator".to_string()),
        }
    }

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("correct horse").expect("hash");

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash).expect("verify"));
        assert!(!verify_password("wrong horse", &hash).expect("verify"));
    }

    #[test]
    fn login_builds_session_and_audits() {
        let mut repo = FakeRepo::default();
        let stored = credentials("s3cret-pass");
        repo.user_reader
            .expect_get_user_credentials()
            .withf(|username| username == "plant.manager")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        repo.audit_writer
            .expect_record_audit()
            .withf(|entry| entry.action == AuditAction::Login && entry.performed_by == Some(3))
            .times(1)
            .returning(|_| Ok(()));

        let user = login(&repo, form(" Plant.Manager ", "s3cret-pass")).expect("login");

        assert_eq!(user.user_id, 3);
        assert_eq!(user.employee_id, 9);
        assert_eq!(user.name, "Meera Iyer");
        assert!(user.has_role(crate::ADMIN_ROLE));
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let mut repo = FakeRepo::default();
        let stored = credentials("s3cret-pass");
        repo.user_reader
            .expect_get_user_credentials()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.audit_writer.expect_record_audit().never();

        let result = login(&repo, form("plant.manager", "guess"));

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn unknown_user_is_unauthorized() {
        let mut repo = FakeRepo::default();
        repo.user_reader
            .expect_get_user_credentials()
            .returning(|_| Ok(None));

        let result = login(&repo, form("nobody", "whatever"));

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
