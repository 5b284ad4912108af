use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::job_card::JobStatus;

/// Links a job card to the people and machines working it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assignment {
    pub id: i32,
    pub job_card_id: i32,
    pub employee_id: Option<i32>,
    /// Free text such as "Driver" or "Pump operator".
    pub role_in_job: Option<String>,
    pub vehicle_id: Option<i32>,
    pub equipment_id: Option<i32>,
    pub assigned_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentView {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub job_type: String,
    pub job_description: String,
    pub job_status: JobStatus,
    pub employee_name: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_registration: Option<String>,
    pub equipment_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub job_card_id: i32,
    pub employee_id: Option<i32>,
    pub role_in_job: Option<String>,
    pub vehicle_id: Option<i32>,
    pub equipment_id: Option<i32>,
}

/// Edit payload; blank choices clear the column.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAssignment {
    pub employee_id: Option<i32>,
    pub role_in_job: Option<String>,
    pub vehicle_id: Option<i32>,
    pub equipment_id: Option<i32>,
}
