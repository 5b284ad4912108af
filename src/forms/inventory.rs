use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::inventory::{NewInventoryItem, UpdateInventoryItem};
use crate::forms::{empty_string_as_none, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;
const UNIT_MAX_LEN: u64 = 16;

pub type InventoryFormResult<T> = Result<T, InventoryFormError>;

#[derive(Debug, Error)]
pub enum InventoryFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("material name and unit are required")]
    MissingField,
}

/// Material modal on the inventory page; `material_id` selects the row to
/// update.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveInventoryForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub material_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub supplier_id: Option<i32>,
    #[validate(range(min = 0.0))]
    pub current_stock: f64,
    #[validate(length(min = 1, max = UNIT_MAX_LEN))]
    pub unit: String,
    #[validate(range(min = 0.0))]
    pub threshold: f64,
}

impl SaveInventoryForm {
    pub fn into_new_item(self, today: NaiveDate) -> InventoryFormResult<NewInventoryItem> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let unit = sanitize_inline_text(&self.unit);
        if name.is_empty() || unit.is_empty() {
            return Err(InventoryFormError::MissingField);
        }

        Ok(NewInventoryItem {
            name,
            supplier_id: self.supplier_id,
            current_stock: self.current_stock,
            unit,
            threshold: self.threshold,
            last_updated: today,
        })
    }

    pub fn into_update_item(self, today: NaiveDate) -> InventoryFormResult<UpdateInventoryItem> {
        let item = self.into_new_item(today)?;
        Ok(UpdateInventoryItem {
            name: item.name,
            supplier_id: item.supplier_id,
            current_stock: item.current_stock,
            unit: item.unit,
            threshold: item.threshold,
            last_updated: item.last_updated,
        })
    }
}
