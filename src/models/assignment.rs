use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::assignment::{
    Assignment as DomainAssignment, NewAssignment as DomainNewAssignment,
    UpdateAssignment as DomainUpdateAssignment,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::job_assignments)]
pub struct Assignment {
    pub id: i32,
    pub job_card_id: i32,
    pub employee_id: Option<i32>,
    pub role_in_job: Option<String>,
    pub vehicle_id: Option<i32>,
    pub equipment_id: Option<i32>,
    pub assigned_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_assignments)]
pub struct NewAssignment<'a> {
    pub job_card_id: i32,
    pub employee_id: Option<i32>,
    pub role_in_job: Option<&'a str>,
    pub vehicle_id: Option<i32>,
    pub equipment_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::job_assignments)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateAssignment<'a> {
    pub employee_id: Option<i32>,
    pub role_in_job: Option<&'a str>,
    pub vehicle_id: Option<i32>,
    pub equipment_id: Option<i32>,
}

impl From<Assignment> for DomainAssignment {
    fn from(value: Assignment) -> Self {
        Self {
            id: value.id,
            job_card_id: value.job_card_id,
            employee_id: value.employee_id,
            role_in_job: value.role_in_job,
            vehicle_id: value.vehicle_id,
            equipment_id: value.equipment_id,
            assigned_at: value.assigned_at,
        }
    }
}

impl<'a> From<&'a DomainNewAssignment> for NewAssignment<'a> {
    fn from(value: &'a DomainNewAssignment) -> Self {
        Self {
            job_card_id: value.job_card_id,
            employee_id: value.employee_id,
            role_in_job: value.role_in_job.as_deref(),
            vehicle_id: value.vehicle_id,
            equipment_id: value.equipment_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateAssignment> for UpdateAssignment<'a> {
    fn from(value: &'a DomainUpdateAssignment) -> Self {
        Self {
            employee_id: value.employee_id,
            role_in_job: value.role_in_job.as_deref(),
            vehicle_id: value.vehicle_id,
            equipment_id: value.equipment_id,
        }
    }
}
