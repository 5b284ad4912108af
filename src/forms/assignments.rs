use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::assignment::{NewAssignment, UpdateAssignment};
use crate::forms::{empty_string_as_none, optional_text};

const ROLE_MAX_LEN: u64 = 64;

pub type AssignmentFormResult<T> = Result<T, AssignmentFormError>;

#[derive(Debug, Error)]
pub enum AssignmentFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("choose an employee, a vehicle or equipment to assign")]
    NothingAssigned,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAssignmentForm {
    #[validate(range(min = 1))]
    pub job_card_id: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employee_id: Option<i32>,
    #[validate(length(max = ROLE_MAX_LEN))]
    pub role_in_job: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub equipment_id: Option<i32>,
}

impl NewAssignmentForm {
    pub fn into_new_assignment(self) -> AssignmentFormResult<NewAssignment> {
        self.validate()?;

        if self.employee_id.is_none() && self.vehicle_id.is_none() && self.equipment_id.is_none() {
            return Err(AssignmentFormError::NothingAssigned);
        }

        Ok(NewAssignment {
            job_card_id: self.job_card_id,
            employee_id: self.employee_id,
            role_in_job: optional_text(self.role_in_job.as_deref()),
            vehicle_id: self.vehicle_id,
            equipment_id: self.equipment_id,
        })
    }
}

/// Edit form; blank selections clear the column.
#[derive(Debug, Deserialize, Validate)]
pub struct EditAssignmentForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employee_id: Option<i32>,
    #[validate(length(max = ROLE_MAX_LEN))]
    pub role_in_job: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub equipment_id: Option<i32>,
}

impl EditAssignmentForm {
    pub fn into_update(self) -> AssignmentFormResult<UpdateAssignment> {
        self.validate()?;
        Ok(UpdateAssignment {
            employee_id: self.employee_id,
            role_in_job: optional_text(self.role_in_job.as_deref()),
            vehicle_id: self.vehicle_id,
            equipment_id: self.equipment_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assignment_needs_a_resource() {
        let form = NewAssignmentForm {
            job_card_id: 4,
            employee_id: None,
            role_in_job: Some("Driver".to_string()),
            vehicle_id: None,
            equipment_id: None,
        };

        assert!(matches!(
            form.into_new_assignment(),
            Err(AssignmentFormError::NothingAssigned)
        ));
    }

    #[test]
    fn edit_clears_blank_fields() {
        let form = EditAssignmentForm {
            employee_id: Some(3),
            role_in_job: Some("  ".to_string()),
            vehicle_id: None,
            equipment_id: None,
        };

        let update = form.into_update().expect("valid form");

        assert_eq!(update.employee_id, Some(3));
        assert_eq!(update.role_in_job, None);
        assert_eq!(update.vehicle_id, None);
    }
}
