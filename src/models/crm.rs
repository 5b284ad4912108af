use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::crm::{
    Lead as DomainLead, NewLead as DomainNewLead, NewOpportunity as DomainNewOpportunity,
    NewTicket as DomainNewTicket, Opportunity as DomainOpportunity, Ticket as DomainTicket,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::crm_leads)]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::crm_leads)]
#[diesel(treat_none_as_null = true)]
pub struct NewLead<'a> {
    pub name: &'a str,
    pub company: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub source: Option<&'a str>,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::crm_opportunities)]
pub struct Opportunity {
    pub id: i32,
    pub lead_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub title: String,
    pub value_cents: i64,
    pub stage: String,
    pub expected_close: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::crm_opportunities)]
#[diesel(treat_none_as_null = true)]
pub struct NewOpportunity<'a> {
    pub lead_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub title: &'a str,
    pub value_cents: i64,
    pub stage: &'a str,
    pub expected_close: Option<NaiveDate>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::crm_tickets)]
pub struct Ticket {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub subject: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::crm_tickets)]
pub struct NewTicket<'a> {
    pub customer_id: Option<i32>,
    pub subject: &'a str,
    pub description: Option<&'a str>,
    pub priority: &'a str,
}

impl From<Lead> for DomainLead {
    fn from(value: Lead) -> Self {
        Self {
            id: value.id,
            name: value.name,
            company: value.company,
            email: value.email,
            phone: value.phone,
            source: value.source,
            status: parse_label(&value.status),
            notes: value.notes,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(value: &'a DomainNewLead) -> Self {
        Self {
            name: value.name.as_str(),
            company: value.company.as_deref(),
            email: value.email.as_deref(),
            phone: value.phone.as_deref(),
            source: value.source.as_deref(),
            status: value.status.as_str(),
            notes: value.notes.as_deref(),
        }
    }
}

impl From<Opportunity> for DomainOpportunity {
    fn from(value: Opportunity) -> Self {
        Self {
            id: value.id,
            lead_id: value.lead_id,
            customer_id: value.customer_id,
            title: value.title,
            value_cents: value.value_cents,
            stage: parse_label(&value.stage),
            expected_close: value.expected_close,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewOpportunity> for NewOpportunity<'a> {
    fn from(value: &'a DomainNewOpportunity) -> Self {
        Self {
            lead_id: value.lead_id,
            customer_id: value.customer_id,
            title: value.title.as_str(),
            value_cents: value.value_cents,
            stage: value.stage.as_str(),
            expected_close: value.expected_close,
        }
    }
}

impl From<Ticket> for DomainTicket {
    fn from(value: Ticket) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            subject: value.subject,
            description: value.description,
            status: parse_label(&value.status),
            priority: parse_label(&value.priority),
            created_at: value.created_at,
            resolved_at: value.resolved_at,
        }
    }
}

impl<'a> From<&'a DomainNewTicket> for NewTicket<'a> {
    fn from(value: &'a DomainNewTicket) -> Self {
        Self {
            customer_id: value.customer_id,
            subject: value.subject.as_str(),
            description: value.description.as_deref(),
            priority: value.priority.as_str(),
        }
    }
}
