use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub type UpdateSupplier = NewSupplier;

labeled_enum! {
    pub enum PurchaseOrderStatus {
        Draft => "Draft",
        Ordered => "Ordered",
        Received => "Received",
        Cancelled => "Cancelled",
    }
    default = Ordered;
}

/// Material ordered from a supplier; receiving it adds to stock.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: i32,
    pub supplier_id: i32,
    pub material_id: i32,
    pub quantity: f64,
    pub unit_cost_cents: i64,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub status: PurchaseOrderStatus,
    pub received_at: Option<NaiveDateTime>,
}

impl PurchaseOrder {
    pub fn total_cents(&self) -> i64 {
        (self.quantity * self.unit_cost_cents as f64).round() as i64
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PurchaseOrderView {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    pub supplier_name: String,
    pub material_name: String,
    pub unit: String,
    pub total_cents: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchaseOrder {
    pub supplier_id: i32,
    pub material_id: i32,
    pub quantity: f64,
    pub unit_cost_cents: i64,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub status: PurchaseOrderStatus,
}
