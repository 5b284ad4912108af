use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::job_card::{
    JobCard as DomainJobCard, MaterialUsage as DomainMaterialUsage,
    NewJobCard as DomainNewJobCard, NewMaterialUsage as DomainNewMaterialUsage,
    ProgressLog as DomainProgressLog,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::job_cards)]
pub struct JobCard {
    pub id: i32,
    pub related_order_id: Option<i32>,
    pub job_type: String,
    pub description: String,
    pub assigned_to: Option<i32>,
    pub status: String,
    pub priority: String,
    pub scheduled_start: Option<NaiveDateTime>,
    pub scheduled_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_cards)]
pub struct NewJobCard<'a> {
    pub related_order_id: Option<i32>,
    pub job_type: &'a str,
    pub description: &'a str,
    pub assigned_to: Option<i32>,
    pub status: &'a str,
    pub priority: &'a str,
    pub scheduled_start: Option<NaiveDateTime>,
    pub scheduled_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::job_progress_logs)]
#[diesel(belongs_to(JobCard, foreign_key = job_card_id))]
pub struct ProgressLog {
    pub id: i32,
    pub job_card_id: i32,
    pub updated_by: Option<i32>,
    pub update_time: NaiveDateTime,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_progress_logs)]
pub struct NewProgressLog<'a> {
    pub job_card_id: i32,
    pub updated_by: Option<i32>,
    pub update_time: NaiveDateTime,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::job_material_usage)]
#[diesel(belongs_to(JobCard, foreign_key = job_card_id))]
pub struct MaterialUsage {
    pub id: i32,
    pub job_card_id: i32,
    pub material_id: i32,
    pub quantity_used: f64,
    pub recorded_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_material_usage)]
pub struct NewMaterialUsage {
    pub job_card_id: i32,
    pub material_id: i32,
    pub quantity_used: f64,
}

impl From<JobCard> for DomainJobCard {
    fn from(value: JobCard) -> Self {
        Self {
            id: value.id,
            related_order_id: value.related_order_id,
            job_type: value.job_type,
            description: value.description,
            assigned_to: value.assigned_to,
            status: parse_label(&value.status),
            priority: parse_label(&value.priority),
            scheduled_start: value.scheduled_start,
            scheduled_end: value.scheduled_end,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewJobCard> for NewJobCard<'a> {
    fn from(value: &'a DomainNewJobCard) -> Self {
        Self {
            related_order_id: value.related_order_id,
            job_type: value.job_type.as_str(),
            description: value.description.as_str(),
            assigned_to: value.assigned_to,
            status: value.status.as_str(),
            priority: value.priority.as_str(),
            scheduled_start: value.scheduled_start,
            scheduled_end: value.scheduled_end,
        }
    }
}

impl From<ProgressLog> for DomainProgressLog {
    fn from(value: ProgressLog) -> Self {
        Self {
            id: value.id,
            job_card_id: value.job_card_id,
            updated_by: value.updated_by,
            update_time: value.update_time,
            status: parse_label(&value.status),
            notes: value.notes,
        }
    }
}

impl From<MaterialUsage> for DomainMaterialUsage {
    fn from(value: MaterialUsage) -> Self {
        Self {
            id: value.id,
            job_card_id: value.job_card_id,
            material_id: value.material_id,
            quantity_used: value.quantity_used,
            recorded_at: value.recorded_at,
        }
    }
}

impl From<&DomainNewMaterialUsage> for NewMaterialUsage {
    fn from(value: &DomainNewMaterialUsage) -> Self {
        Self {
            job_card_id: value.job_card_id,
            material_id: value.material_id,
            quantity_used: value.quantity_used,
        }
    }
}
