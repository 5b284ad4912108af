use crate::domain::auth::AuthenticatedUser;
use crate::domain::employee::EmployeeView;
use crate::domain::user::{NewUser, UserAccount};
use crate::forms::users::CreateUserForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::auth::hash_password;
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Data required to render the user accounts page.
pub struct UsersPageData {
    /// Existing login accounts.
    pub accounts: Vec<UserAccount>,
    /// Employees that can still be given a login.
    pub employees: Vec<EmployeeView>,
}

pub fn load_users_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<UsersPageData>
where
    R: UserReader + ?Sized,
{
    ensure_admin(user)?;

    let accounts = repo.list_user_accounts().map_err(ServiceError::from)?;
    let employees = repo
        .list_employees_without_account()
        .map_err(ServiceError::from)?;

    Ok(UsersPageData {
        accounts,
        employees,
    })
}

/// Creates a login for an employee; a taken username is a `Conflict`.
pub fn create_user<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateUserForm,
) -> ServiceResult<UserAccount>
where
    R: UserWriter + ?Sized,
{
    ensure_admin(user)?;

    let registration = form
        .into_registration()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    let password_hash = hash_password(&registration.password)?;
    let new_user = NewUser::new(
        registration.employee_id,
        &registration.username,
        password_hash,
    );

    repo.create_user(&new_user, user.user_id)
        .map_err(ServiceError::from)
}

pub fn delete_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    ensure_admin(user)?;

    if user_id == user.user_id {
        return Err(ServiceError::Form(
            "You cannot delete your own account".to_string(),
        ));
    }

    repo.delete_user(user_id, user.user_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::services::auth::verify_password;
    use crate::services::test_support::{FakeRepo, admin, datetime, operator};

    fn form(username: &str) -> CreateUserForm {
        CreateUserForm {
            employee_id: 20,
            username: username.to_string(),
            password: "mixer-plant-42".to_string(),
        }
    }

    #[test]
    fn users_page_is_admin_only() {
        let repo = FakeRepo::default();

        let result = load_users_page(&repo, &operator());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn create_user_stores_argon2_hash() {
        let mut repo = FakeRepo::default();
        repo.user_writer
            .expect_create_user()
            .withf(|new_user, actor| {
                new_user.username == "sunil.y"
                    && verify_password("mixer-plant-42", &new_user.password_hash).unwrap_or(false)
                    && *actor == 7
            })
            .times(1)
            .returning(|new_user, _| {
                Ok(UserAccount {
                    id: 5,
                    username: new_user.username.clone(),
                    employee_id: new_user.employee_id,
                    employee_name: "Sunil Yadav".to_string(),
                    role_name: None,
                    created_at: datetime(),
                })
            });

        let account = create_user(&repo, &admin(), form("Sunil.Y")).expect("account");

        assert_eq!(account.id, 5);
    }

    #[test]
    fn taken_username_is_a_conflict() {
        let mut repo = FakeRepo::default();
        repo.user_writer.expect_create_user().returning(|_, _| {
            Err(RepositoryError::Conflict(
                "UNIQUE constraint failed: users.username".to_string(),
            ))
        });

        let result = create_user(&repo, &admin(), form("admin"));

        assert!(matches!(result, Err(ServiceError::Conflict)));
    }

    #[test]
    fn admin_cannot_delete_own_account() {
        let mut repo = FakeRepo::default();
        repo.user_writer.expect_delete_user().never();

        let result = delete_user(&repo, &admin(), 7);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
