use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{NewOrder, OrderStatus, UpdateOrder};
use crate::forms::sanitize_inline_text;

const SITE_MAX_LEN: u64 = 256;

pub type OrderFormResult<T> = Result<T, OrderFormError>;

#[derive(Debug, Error)]
pub enum OrderFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("delivery site cannot be empty")]
    EmptySite,
}

/// Fields shared by the new-order and edit-order pages.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    /// Volume in the product's unit.
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1, max = SITE_MAX_LEN))]
    pub delivery_site: String,
    pub scheduled_date: NaiveDate,
    /// Only honoured on edit; new orders start `Confirmed`.
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl OrderForm {
    fn clean_site(&self) -> OrderFormResult<String> {
        self.validate()?;
        let site = sanitize_inline_text(&self.delivery_site);
        if site.is_empty() {
            return Err(OrderFormError::EmptySite);
        }
        Ok(site)
    }

    pub fn into_new_order(self, created_by: i32) -> OrderFormResult<NewOrder> {
        let site = self.clean_site()?;
        Ok(NewOrder::new(
            self.customer_id,
            self.product_id,
            self.quantity,
            site,
            self.scheduled_date,
        )
        .with_created_by(created_by))
    }

    pub fn into_update_order(self, updated_at: NaiveDateTime) -> OrderFormResult<UpdateOrder> {
        let site = self.clean_site()?;
        Ok(UpdateOrder {
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
            delivery_site: site,
            scheduled_date: self.scheduled_date,
            status: self.status.unwrap_or_default(),
            updated_at,
        })
    }
}
