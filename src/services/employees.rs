use crate::domain::auth::AuthenticatedUser;
use crate::domain::employee::EmployeeView;
use crate::domain::organization::{Department, Role};
use crate::forms::employees::SaveEmployeeForm;
use crate::repository::{EmployeeReader, EmployeeWriter, OrganizationReader};
use crate::services::{Saved, ServiceError, ServiceResult, today};

/// Data required to render the employee directory.
pub struct EmployeesPageData {
    /// Employees with role and department names.
    pub employees: Vec<EmployeeView>,
    /// Roles offered by the employee form.
    pub roles: Vec<Role>,
    /// Departments offered by the employee form.
    pub departments: Vec<Department>,
}

pub fn load_employees_page<R>(repo: &R) -> ServiceResult<EmployeesPageData>
where
    R: EmployeeReader + OrganizationReader + ?Sized,
{
    let employees = repo.list_employees().map_err(ServiceError::from)?;
    let roles = repo.list_roles().map_err(ServiceError::from)?;
    let departments = repo.list_departments().map_err(ServiceError::from)?;

    Ok(EmployeesPageData {
        employees,
        roles,
        departments,
    })
}

pub fn save_employee<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveEmployeeForm,
) -> ServiceResult<Saved>
where
    R: EmployeeWriter + ?Sized,
{
    match form.employee_id {
        Some(employee_id) => {
            let updates = form
                .into_update_employee()
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            repo.update_employee(employee_id, &updates, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            let new_employee = form
                .into_new_employee(today())
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            repo.create_employee(&new_employee, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

/// Removes the employee and any login accounts they hold.
pub fn delete_employee<R>(
    repo: &R,
    user: &AuthenticatedUser,
    employee_id: i32,
) -> ServiceResult<()>
where
    R: EmployeeWriter + ?Sized,
{
    if employee_id == user.employee_id {
        return Err(ServiceError::Form(
            "You cannot delete your own employee record".to_string(),
        ));
    }

    repo.delete_employee(employee_id, user.user_id)
        .map_err(ServiceError::from)
}
