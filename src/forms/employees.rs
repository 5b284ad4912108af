use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::employee::{EmployeeStatus, NewEmployee, UpdateEmployee};
use crate::forms::{empty_string_as_none, optional_text, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;
const PHONE_MAX_LEN: u64 = 32;

pub type EmployeeFormResult<T> = Result<T, EmployeeFormError>;

#[derive(Debug, Error)]
pub enum EmployeeFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("employee name cannot be empty")]
    EmptyName,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveEmployeeForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employee_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub role_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_id: Option<i32>,
    #[validate(length(max = PHONE_MAX_LEN))]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl SaveEmployeeForm {
    pub fn into_update_employee(self) -> EmployeeFormResult<UpdateEmployee> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(EmployeeFormError::EmptyName);
        }

        Ok(UpdateEmployee {
            name,
            role_id: self.role_id,
            department_id: self.department_id,
            phone: optional_text(self.phone.as_deref()),
            email: optional_text(self.email.as_deref()).map(|email| email.to_lowercase()),
            status: self.status,
        })
    }

    /// New hires join on the day they are entered.
    pub fn into_new_employee(self, today: NaiveDate) -> EmployeeFormResult<NewEmployee> {
        let update = self.into_update_employee()?;
        Ok(NewEmployee {
            name: update.name,
            role_id: update.role_id,
            department_id: update.department_id,
            phone: update.phone,
            email: update.email,
            date_of_joining: today,
            status: update.status,
        })
    }
}
