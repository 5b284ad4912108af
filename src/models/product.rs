use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub mix_design: Option<String>,
    pub unit: String,
    pub unit_price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub mix_design: Option<&'a str>,
    pub unit: &'a str,
    pub unit_price_cents: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub mix_design: Option<&'a str>,
    pub unit: &'a str,
    pub unit_price_cents: i64,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            mix_design: value.mix_design,
            unit: value.unit,
            unit_price_cents: value.unit_price_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            mix_design: value.mix_design.as_deref(),
            unit: value.unit.as_str(),
            unit_price_cents: value.unit_price_cents,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            mix_design: value.mix_design.as_deref(),
            unit: value.unit.as_str(),
            unit_price_cents: value.unit_price_cents,
            updated_at: value.updated_at,
        }
    }
}
