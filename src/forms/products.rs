use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::forms::{
    AmountError, empty_string_as_none, optional_multiline, parse_amount_cents, sanitize_inline_text,
};

const NAME_MAX_LEN: u64 = 64;
const UNIT_MAX_LEN: u64 = 16;
const DEFAULT_UNIT: &str = "m3";

pub type ProductFormResult<T> = Result<T, ProductFormError>;

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("product name cannot be empty")]
    EmptyName,
    #[error("unit price: {0}")]
    Price(#[from] AmountError),
}

/// Concrete grade form; `product_id` selects the record to update.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveProductForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub product_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub mix_design: Option<String>,
    #[validate(length(max = UNIT_MAX_LEN))]
    pub unit: Option<String>,
    /// Decimal price per unit, e.g. `4850.00`.
    pub unit_price: String,
}

impl SaveProductForm {
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let unit = self
            .unit
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|unit| !unit.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());

        Ok(NewProduct {
            name,
            mix_design: optional_multiline(self.mix_design.as_deref()),
            unit,
            unit_price_cents: parse_amount_cents(&self.unit_price)?,
        })
    }
}
