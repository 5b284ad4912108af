use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::integration::{
    IntegrationEvent as DomainIntegrationEvent, NewIntegrationEvent as DomainNewIntegrationEvent,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::integration_events)]
pub struct IntegrationEvent {
    pub id: i32,
    pub related_order_id: Option<i32>,
    pub job_card_id: Option<i32>,
    pub event_type: String,
    pub event_time: NaiveDateTime,
    pub details: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::integration_events)]
pub struct NewIntegrationEvent<'a> {
    pub related_order_id: Option<i32>,
    pub job_card_id: Option<i32>,
    pub event_type: &'a str,
    pub event_time: NaiveDateTime,
    pub details: Option<&'a str>,
}

impl From<IntegrationEvent> for DomainIntegrationEvent {
    fn from(value: IntegrationEvent) -> Self {
        Self {
            id: value.id,
            related_order_id: value.related_order_id,
            job_card_id: value.job_card_id,
            event_type: parse_label(&value.event_type),
            event_time: value.event_time,
            details: value.details,
        }
    }
}

impl<'a> NewIntegrationEvent<'a> {
    pub fn new(value: &'a DomainNewIntegrationEvent, event_time: NaiveDateTime) -> Self {
        Self {
            related_order_id: value.related_order_id,
            job_card_id: value.job_card_id,
            event_type: value.event_type.as_str(),
            event_time,
            details: value.details.as_deref(),
        }
    }
}
