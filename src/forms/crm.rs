use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::Priority;
use crate::domain::crm::{
    LeadStatus, NewLead, NewOpportunity, NewTicket, OpportunityStage, TicketStatus,
};
use crate::forms::{
    AmountError, empty_string_as_none, optional_multiline, optional_text, parse_amount_cents,
    sanitize_inline_text,
};

const NAME_MAX_LEN: u64 = 128;
const SUBJECT_MAX_LEN: u64 = 200;

pub type CrmFormResult<T> = Result<T, CrmFormError>;

#[derive(Debug, Error)]
pub enum CrmFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("value: {0}")]
    Amount(#[from] AmountError),
}

fn required(value: &str, field: &'static str) -> CrmFormResult<String> {
    let value = sanitize_inline_text(value);
    if value.is_empty() {
        return Err(CrmFormError::Empty(field));
    }
    Ok(value)
}

#[derive(Debug, Deserialize, Validate)]
pub struct LeadForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lead_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = NAME_MAX_LEN))]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    pub notes: Option<String>,
}

impl LeadForm {
    pub fn into_new_lead(self) -> CrmFormResult<NewLead> {
        self.validate()?;
        Ok(NewLead {
            name: required(&self.name, "lead name")?,
            company: optional_text(self.company.as_deref()),
            email: optional_text(self.email.as_deref()).map(|email| email.to_lowercase()),
            phone: optional_text(self.phone.as_deref()),
            source: optional_text(self.source.as_deref()),
            status: self.status,
            notes: optional_multiline(self.notes.as_deref()),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct OpportunityForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub opportunity_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lead_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub customer_id: Option<i32>,
    #[validate(length(min = 1, max = SUBJECT_MAX_LEN))]
    pub title: String,
    /// Expected deal value; blank means zero.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub stage: OpportunityStage,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub expected_close: Option<NaiveDate>,
}

impl OpportunityForm {
    pub fn into_new_opportunity(self) -> CrmFormResult<NewOpportunity> {
        self.validate()?;

        let value_cents = if self.value.trim().is_empty() {
            0
        } else {
            parse_amount_cents(&self.value)?
        };

        Ok(NewOpportunity {
            lead_id: self.lead_id,
            customer_id: self.customer_id,
            title: required(&self.title, "opportunity title")?,
            value_cents,
            stage: self.stage,
            expected_close: self.expected_close,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct TicketForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub customer_id: Option<i32>,
    #[validate(length(min = 1, max = SUBJECT_MAX_LEN))]
    pub subject: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl TicketForm {
    pub fn into_new_ticket(self) -> CrmFormResult<NewTicket> {
        self.validate()?;
        Ok(NewTicket {
            customer_id: self.customer_id,
            subject: required(&self.subject, "ticket subject")?,
            description: optional_multiline(self.description.as_deref()),
            priority: self.priority,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TicketStatusForm {
    pub status: TicketStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_keeps_status_and_cleans_contact() {
        let form = LeadForm {
            lead_id: None,
            name: "Anita Rao".to_string(),
            company: Some(" Skyline Infra ".to_string()),
            email: Some("Anita@Skyline.example".to_string()),
            phone: None,
            source: Some("".to_string()),
            status: LeadStatus::Qualified,
            notes: None,
        };

        let lead = form.into_new_lead().expect("valid form");

        assert_eq!(lead.company.as_deref(), Some("Skyline Infra"));
        assert_eq!(lead.email.as_deref(), Some("anita@skyline.example"));
        assert_eq!(lead.source, None);
        assert_eq!(lead.status, LeadStatus::Qualified);
    }

    #[test]
    fn blank_opportunity_value_is_zero() {
        let form = OpportunityForm {
            opportunity_id: None,
            lead_id: Some(1),
            customer_id: None,
            title: "Metro phase 2".to_string(),
            value: " ".to_string(),
            stage: OpportunityStage::Proposal,
            expected_close: None,
        };

        let opportunity = form.into_new_opportunity().expect("valid form");

        assert_eq!(opportunity.value_cents, 0);
        assert_eq!(opportunity.stage, OpportunityStage::Proposal);
    }

    #[test]
    fn ticket_subject_is_required() {
        let form = TicketForm {
            customer_id: None,
            subject: " \t ".to_string(),
            description: None,
            priority: Priority::Urgent,
        };

        assert!(matches!(
            form.into_new_ticket(),
            Err(CrmFormError::Empty("ticket subject"))
        ));
    }
}
