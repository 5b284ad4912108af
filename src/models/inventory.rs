use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::inventory::{
    InventoryItem as DomainInventoryItem, NewInventoryItem as DomainNewInventoryItem,
    UpdateInventoryItem as DomainUpdateInventoryItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub supplier_id: Option<i32>,
    pub current_stock: f64,
    pub unit: String,
    pub threshold: f64,
    pub last_updated: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem<'a> {
    pub name: &'a str,
    pub supplier_id: Option<i32>,
    pub current_stock: f64,
    pub unit: &'a str,
    pub threshold: f64,
    pub last_updated: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::inventory_items)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateInventoryItem<'a> {
    pub name: &'a str,
    pub supplier_id: Option<i32>,
    pub current_stock: f64,
    pub unit: &'a str,
    pub threshold: f64,
    pub last_updated: NaiveDate,
}

impl From<InventoryItem> for DomainInventoryItem {
    fn from(value: InventoryItem) -> Self {
        Self {
            id: value.id,
            name: value.name,
            supplier_id: value.supplier_id,
            current_stock: value.current_stock,
            unit: value.unit,
            threshold: value.threshold,
            last_updated: value.last_updated,
        }
    }
}

impl<'a> From<&'a DomainNewInventoryItem> for NewInventoryItem<'a> {
    fn from(value: &'a DomainNewInventoryItem) -> Self {
        Self {
            name: value.name.as_str(),
            supplier_id: value.supplier_id,
            current_stock: value.current_stock,
            unit: value.unit.as_str(),
            threshold: value.threshold,
            last_updated: value.last_updated,
        }
    }
}

impl<'a> From<&'a DomainUpdateInventoryItem> for UpdateInventoryItem<'a> {
    fn from(value: &'a DomainUpdateInventoryItem) -> Self {
        Self {
            name: value.name.as_str(),
            supplier_id: value.supplier_id,
            current_stock: value.current_stock,
            unit: value.unit.as_str(),
            threshold: value.threshold,
            last_updated: value.last_updated,
        }
    }
}
