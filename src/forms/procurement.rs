use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::procurement::{NewPurchaseOrder, NewSupplier, PurchaseOrderStatus};
use crate::forms::{
    AmountError, empty_string_as_none, optional_multiline, optional_text, parse_amount_cents,
    sanitize_inline_text,
};

const NAME_MAX_LEN: u64 = 128;

pub type ProcurementFormResult<T> = Result<T, ProcurementFormError>;

#[derive(Debug, Error)]
pub enum ProcurementFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("supplier name cannot be empty")]
    EmptyName,
    #[error("unit cost: {0}")]
    Amount(#[from] AmountError),
    #[error("expected date must not be before today")]
    ExpectedInPast,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SupplierForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub supplier_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
}

impl SupplierForm {
    pub fn into_new_supplier(self) -> ProcurementFormResult<NewSupplier> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProcurementFormError::EmptyName);
        }

        Ok(NewSupplier {
            name,
            contact_person: optional_text(self.contact_person.as_deref()),
            phone: optional_text(self.phone.as_deref()),
            email: optional_text(self.email.as_deref()).map(|email| email.to_lowercase()),
            address: optional_multiline(self.address.as_deref()),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseOrderForm {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    #[validate(range(min = 1))]
    pub material_id: i32,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    pub unit_cost: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub expected_date: Option<NaiveDate>,
}

impl PurchaseOrderForm {
    /// Orders are placed today with status `Ordered`.
    pub fn into_new_order(self, today: NaiveDate) -> ProcurementFormResult<NewPurchaseOrder> {
        self.validate()?;

        if self.expected_date.is_some_and(|expected| expected < today) {
            return Err(ProcurementFormError::ExpectedInPast);
        }

        Ok(NewPurchaseOrder {
            supplier_id: self.supplier_id,
            material_id: self.material_id,
            quantity: self.quantity,
            unit_cost_cents: parse_amount_cents(&self.unit_cost)?,
            order_date: today,
            expected_date: self.expected_date,
            status: PurchaseOrderStatus::Ordered,
        })
    }
}
