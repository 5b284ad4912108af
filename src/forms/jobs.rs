use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::Priority;
use crate::domain::job_card::{JobStatus, JobStatusChange, NewJobCard, NewMaterialUsage};
use crate::forms::{
    empty_string_as_none, optional_datetime, optional_multiline, sanitize_inline_text,
    sanitize_multiline_text,
};

const JOB_TYPE_MAX_LEN: u64 = 64;
const DESCRIPTION_MAX_LEN: u64 = 2000;

pub type JobFormResult<T> = Result<T, JobFormError>;

#[derive(Debug, Error)]
pub enum JobFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("job type and description are required")]
    MissingField,
    #[error("scheduled end must not be before the start")]
    EndBeforeStart,
    #[error("invalid status `{0}`")]
    UnknownStatus(String),
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewJobCardForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub related_order_id: Option<i32>,
    #[validate(length(min = 1, max = JOB_TYPE_MAX_LEN))]
    pub job_type: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub assigned_to: Option<i32>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub scheduled_start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub scheduled_end: Option<NaiveDateTime>,
}

impl NewJobCardForm {
    /// Job cards always start `Open`.
    pub fn into_new_job(self) -> JobFormResult<NewJobCard> {
        self.validate()?;

        let job_type = sanitize_inline_text(&self.job_type);
        let description = sanitize_multiline_text(&self.description);
        if job_type.is_empty() || description.is_empty() {
            return Err(JobFormError::MissingField);
        }

        if let (Some(start), Some(end)) = (self.scheduled_start, self.scheduled_end) {
            if end < start {
                return Err(JobFormError::EndBeforeStart);
            }
        }

        Ok(NewJobCard {
            related_order_id: self.related_order_id,
            job_type,
            description,
            assigned_to: self.assigned_to,
            status: JobStatus::Open,
            priority: self.priority,
            scheduled_start: self.scheduled_start,
            scheduled_end: self.scheduled_end,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct MaterialUsageForm {
    #[validate(range(min = 1))]
    pub material_id: i32,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity_used: f64,
}

impl MaterialUsageForm {
    pub fn into_new_usage(self, job_card_id: i32) -> JobFormResult<NewMaterialUsage> {
        self.validate()?;
        Ok(NewMaterialUsage {
            job_card_id,
            material_id: self.material_id,
            quantity_used: self.quantity_used,
        })
    }
}

/// JSON body of `POST /api/update_job_status`.
#[derive(Debug, Deserialize)]
pub struct UpdateJobStatusPayload {
    pub job_id: i32,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateJobStatusPayload {
    pub fn into_change(self, updated_by: i32) -> JobFormResult<JobStatusChange> {
        let status = self
            .status
            .parse::<JobStatus>()
            .map_err(|_| JobFormError::UnknownStatus(self.status.clone()))?;

        Ok(JobStatusChange {
            job_id: self.job_id,
            status,
            notes: optional_multiline(self.notes.as_deref()),
            updated_by: Some(updated_by),
        })
    }
}
