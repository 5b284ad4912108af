use chrono::NaiveDateTime;
use serde::Serialize;

/// Concrete grade sold by the plant, e.g. `M25` with its mix design.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub mix_design: Option<String>,
    /// Unit the quantity is sold in, usually `m3`.
    pub unit: String,
    pub unit_price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub mix_design: Option<String>,
    pub unit: String,
    pub unit_price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub name: String,
    pub mix_design: Option<String>,
    pub unit: String,
    pub unit_price_cents: i64,
    pub updated_at: NaiveDateTime,
}
