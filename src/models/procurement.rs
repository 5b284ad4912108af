use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::procurement::{
    NewPurchaseOrder as DomainNewPurchaseOrder, NewSupplier as DomainNewSupplier,
    PurchaseOrder as DomainPurchaseOrder, Supplier as DomainSupplier,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::suppliers)]
#[diesel(treat_none_as_null = true)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub contact_person: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::purchase_orders)]
pub struct PurchaseOrder {
    pub id: i32,
    pub supplier_id: i32,
    pub material_id: i32,
    pub quantity: f64,
    pub unit_cost_cents: i64,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub status: String,
    pub received_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::purchase_orders)]
pub struct NewPurchaseOrder<'a> {
    pub supplier_id: i32,
    pub material_id: i32,
    pub quantity: f64,
    pub unit_cost_cents: i64,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub status: &'a str,
}

impl From<Supplier> for DomainSupplier {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            contact_person: value.contact_person,
            phone: value.phone,
            email: value.email,
            address: value.address,
        }
    }
}

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(value: &'a DomainNewSupplier) -> Self {
        Self {
            name: value.name.as_str(),
            contact_person: value.contact_person.as_deref(),
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            address: value.address.as_deref(),
        }
    }
}

impl From<PurchaseOrder> for DomainPurchaseOrder {
    fn from(value: PurchaseOrder) -> Self {
        Self {
            id: value.id,
            supplier_id: value.supplier_id,
            material_id: value.material_id,
            quantity: value.quantity,
            unit_cost_cents: value.unit_cost_cents,
            order_date: value.order_date,
            expected_date: value.expected_date,
            status: parse_label(&value.status),
            received_at: value.received_at,
        }
    }
}

impl<'a> From<&'a DomainNewPurchaseOrder> for NewPurchaseOrder<'a> {
    fn from(value: &'a DomainNewPurchaseOrder) -> Self {
        Self {
            supplier_id: value.supplier_id,
            material_id: value.material_id,
            quantity: value.quantity,
            unit_cost_cents: value.unit_cost_cents,
            order_date: value.order_date,
            expected_date: value.expected_date,
            status: value.status.as_str(),
        }
    }
}
