use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::compliance::NewComplianceDocument;
use crate::forms::{empty_string_as_none, optional_multiline, optional_text, sanitize_inline_text};

const TITLE_MAX_LEN: u64 = 200;
const TYPE_MAX_LEN: u64 = 64;

pub type ComplianceFormResult<T> = Result<T, ComplianceFormError>;

#[derive(Debug, Error)]
pub enum ComplianceFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("document title and type are required")]
    MissingField,
    #[error("expiry date must not be before the issue date")]
    ExpiryBeforeIssue,
}

/// Permit or certificate record; `document_id` selects the row to update.
#[derive(Debug, Deserialize, Validate)]
pub struct ComplianceForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub document_id: Option<i32>,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(min = 1, max = TYPE_MAX_LEN))]
    pub document_type: String,
    pub reference_no: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ComplianceForm {
    pub fn into_new_document(self) -> ComplianceFormResult<NewComplianceDocument> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        let document_type = sanitize_inline_text(&self.document_type);
        if title.is_empty() || document_type.is_empty() {
            return Err(ComplianceFormError::MissingField);
        }

        if let (Some(issue), Some(expiry)) = (self.issue_date, self.expiry_date) {
            if expiry < issue {
                return Err(ComplianceFormError::ExpiryBeforeIssue);
            }
        }

        Ok(NewComplianceDocument {
            title,
            document_type,
            reference_no: optional_text(self.reference_no.as_deref()),
            vehicle_id: self.vehicle_id,
            employee_id: self.employee_id,
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            notes: optional_multiline(self.notes.as_deref()),
        })
    }
}
