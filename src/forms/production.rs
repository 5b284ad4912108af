use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::production::{BatchStatus, NewProductionBatch, NewQualityCheck, QcResult};
use crate::forms::{empty_string_as_none, optional_multiline, sanitize_inline_text};

const TEST_TYPE_MAX_LEN: u64 = 64;

pub type ProductionFormResult<T> = Result<T, ProductionFormError>;

#[derive(Debug, Error)]
pub enum ProductionFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("select an order or a product for the batch")]
    NothingToProduce,
    #[error("test type cannot be empty")]
    EmptyTestType,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewBatchForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub order_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub product_id: Option<i32>,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub status: Option<BatchStatus>,
}

impl NewBatchForm {
    pub fn into_new_batch(
        self,
        batch_time: NaiveDateTime,
        created_by: i32,
    ) -> ProductionFormResult<NewProductionBatch> {
        self.validate()?;

        if self.order_id.is_none() && self.product_id.is_none() {
            return Err(ProductionFormError::NothingToProduce);
        }

        Ok(NewProductionBatch {
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            location_id: self.location_id,
            batch_time,
            status: self.status.unwrap_or_default(),
            created_by: Some(created_by),
        })
    }
}

/// Slump, cube or temperature test recorded against a batch.
#[derive(Debug, Deserialize, Validate)]
pub struct QualityCheckForm {
    #[validate(length(min = 1, max = TEST_TYPE_MAX_LEN))]
    pub test_type: String,
    #[serde(default)]
    pub result: QcResult,
    pub remarks: Option<String>,
}

impl QualityCheckForm {
    pub fn into_new_check(
        self,
        batch_id: i32,
        tested_by: i32,
        test_date: NaiveDateTime,
    ) -> ProductionFormResult<NewQualityCheck> {
        self.validate()?;

        let test_type = sanitize_inline_text(&self.test_type);
        if test_type.is_empty() {
            return Err(ProductionFormError::EmptyTestType);
        }

        Ok(NewQualityCheck {
            batch_id,
            test_type,
            test_date,
            result: self.result,
            tested_by: Some(tested_by),
            remarks: optional_multiline(self.remarks.as_deref()),
        })
    }
}
