use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::NewCustomer;
use crate::forms::{empty_string_as_none, optional_multiline, optional_text, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;
const PHONE_MAX_LEN: u64 = 32;

pub type CustomerFormResult<T> = Result<T, CustomerFormError>;

#[derive(Debug, Error)]
pub enum CustomerFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("customer name cannot be empty")]
    EmptyName,
}

/// Create-or-update form on the customers page; `customer_id` selects
/// the record to update.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveCustomerForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub customer_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub address: Option<String>,
    #[validate(length(max = PHONE_MAX_LEN))]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email)]
    pub email: Option<String>,
}

impl SaveCustomerForm {
    pub fn into_new_customer(self) -> CustomerFormResult<NewCustomer> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CustomerFormError::EmptyName);
        }

        Ok(NewCustomer {
            name,
            address: optional_multiline(self.address.as_deref()),
            phone: optional_text(self.phone.as_deref()),
            email: optional_text(self.email.as_deref()).map(|email| email.to_lowercase()),
        })
    }
}
