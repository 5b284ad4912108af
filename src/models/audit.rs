use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::audit::{AuditEntry as DomainAuditEntry, NewAuditEntry as DomainNewAuditEntry};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::audit_log)]
pub struct AuditEntry {
    pub id: i32,
    pub entity_type: String,
    pub entity_id: i32,
    pub action: String,
    pub performed_by: Option<i32>,
    pub action_time: NaiveDateTime,
    pub details: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::audit_log)]
pub struct NewAuditEntry<'a> {
    pub entity_type: &'a str,
    pub entity_id: i32,
    pub action: &'a str,
    pub performed_by: Option<i32>,
    pub action_time: NaiveDateTime,
    pub details: Option<&'a str>,
}

impl From<AuditEntry> for DomainAuditEntry {
    fn from(value: AuditEntry) -> Self {
        Self {
            id: value.id,
            entity_type: value.entity_type,
            entity_id: value.entity_id,
            action: value.action,
            performed_by: value.performed_by,
            action_time: value.action_time,
            details: value.details,
        }
    }
}

impl<'a> NewAuditEntry<'a> {
    pub fn new(value: &'a DomainNewAuditEntry, action_time: NaiveDateTime) -> Self {
        Self {
            entity_type: value.entity_type.as_str(),
            entity_id: value.entity_id,
            action: value.action.as_str(),
            performed_by: value.performed_by,
            action_time,
            details: value.details.as_deref(),
        }
    }
}
