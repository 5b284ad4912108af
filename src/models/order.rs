use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(belongs_to(super::customer::Customer, foreign_key = customer_id))]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: f64,
    pub order_date: NaiveDate,
    pub delivery_site: String,
    pub scheduled_date: NaiveDate,
    pub status: String,
    pub created_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: f64,
    pub order_date: NaiveDate,
    pub delivery_site: &'a str,
    pub scheduled_date: NaiveDate,
    pub status: &'a str,
    pub created_by: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder<'a> {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: f64,
    pub delivery_site: &'a str,
    pub scheduled_date: NaiveDate,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
            order_date: value.order_date,
            delivery_site: value.delivery_site,
            scheduled_date: value.scheduled_date,
            status: parse_label(&value.status),
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
            order_date: value.order_date,
            delivery_site: value.delivery_site.as_str(),
            scheduled_date: value.scheduled_date,
            status: value.status.as_str(),
            created_by: value.created_by,
        }
    }
}

impl<'a> From<&'a DomainUpdateOrder> for UpdateOrder<'a> {
    fn from(value: &'a DomainUpdateOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
            delivery_site: value.delivery_site.as_str(),
            scheduled_date: value.scheduled_date,
            status: value.status.as_str(),
            updated_at: value.updated_at,
        }
    }
}
