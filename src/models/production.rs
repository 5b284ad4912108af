use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::production::{
    NewProductionBatch as DomainNewBatch, NewQualityCheck as DomainNewQualityCheck,
    ProductionBatch as DomainBatch, QualityCheck as DomainQualityCheck,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::production_batches)]
pub struct ProductionBatch {
    pub id: i32,
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: f64,
    pub location_id: Option<i32>,
    pub batch_time: NaiveDateTime,
    pub status: String,
    pub created_by: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::production_batches)]
pub struct NewProductionBatch<'a> {
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: f64,
    pub location_id: Option<i32>,
    pub batch_time: NaiveDateTime,
    pub status: &'a str,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::quality_checks)]
#[diesel(belongs_to(ProductionBatch, foreign_key = batch_id))]
pub struct QualityCheck {
    pub id: i32,
    pub batch_id: i32,
    pub test_type: String,
    pub test_date: NaiveDateTime,
    pub result: String,
    pub tested_by: Option<i32>,
    pub remarks: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::quality_checks)]
pub struct NewQualityCheck<'a> {
    pub batch_id: i32,
    pub test_type: &'a str,
    pub test_date: NaiveDateTime,
    pub result: &'a str,
    pub tested_by: Option<i32>,
    pub remarks: Option<&'a str>,
}

impl From<ProductionBatch> for DomainBatch {
    fn from(value: ProductionBatch) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            location_id: value.location_id,
            batch_time: value.batch_time,
            status: parse_label(&value.status),
            created_by: value.created_by,
        }
    }
}

impl<'a> From<&'a DomainNewBatch> for NewProductionBatch<'a> {
    fn from(value: &'a DomainNewBatch) -> Self {
        Self {
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            location_id: value.location_id,
            batch_time: value.batch_time,
            status: value.status.as_str(),
            created_by: value.created_by,
        }
    }
}

impl From<QualityCheck> for DomainQualityCheck {
    fn from(value: QualityCheck) -> Self {
        Self {
            id: value.id,
            batch_id: value.batch_id,
            test_type: value.test_type,
            test_date: value.test_date,
            result: parse_label(&value.result),
            tested_by: value.tested_by,
            remarks: value.remarks,
        }
    }
}

impl<'a> From<&'a DomainNewQualityCheck> for NewQualityCheck<'a> {
    fn from(value: &'a DomainNewQualityCheck) -> Self {
        Self {
            batch_id: value.batch_id,
            test_type: value.test_type.as_str(),
            test_date: value.test_date,
            result: value.result.as_str(),
            tested_by: value.tested_by,
            remarks: value.remarks.as_deref(),
        }
    }
}
