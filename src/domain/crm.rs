use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::Priority;

labeled_enum! {
    pub enum LeadStatus {
        New => "New",
        Contacted => "Contacted",
        Qualified => "Qualified",
        Converted => "Converted",
        Lost => "Lost",
    }
    default = New;
}

labeled_enum! {
    pub enum OpportunityStage {
        Prospecting => "Prospecting",
        Proposal => "Proposal",
        Negotiation => "Negotiation",
        Won => "Won",
        Lost => "Lost",
    }
    default = Prospecting;
}

impl OpportunityStage {
    pub fn is_open(&self) -> bool {
        !matches!(self, OpportunityStage::Won | OpportunityStage::Lost)
    }
}

labeled_enum! {
    pub enum TicketStatus {
        Open => "Open",
        InProgress => "In Progress",
        Resolved => "Resolved",
        Closed => "Closed",
    }
    default = Open;
}

impl TicketStatus {
    /// Resolved and closed tickets carry a `resolved_at` timestamp.
    pub fn is_finished(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub status: LeadStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub status: LeadStatus,
    pub notes: Option<String>,
}

pub type UpdateLead = NewLead;

impl Lead {
    /// Customer name used when converting the lead: the company if known.
    pub fn customer_name(&self) -> &str {
        self.company
            .as_deref()
            .filter(|company| !company.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Opportunity {
    pub id: i32,
    pub lead_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub title: String,
    pub value_cents: i64,
    pub stage: OpportunityStage,
    pub expected_close: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpportunityView {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub lead_name: Option<String>,
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOpportunity {
    pub lead_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub title: String,
    pub value_cents: i64,
    pub stage: OpportunityStage,
    pub expected_close: Option<NaiveDate>,
}

pub type UpdateOpportunity = NewOpportunity;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub subject: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: Priority,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub customer_id: Option<i32>,
    pub subject: String,
    pub description: Option<String>,
    pub priority: Priority,
}
