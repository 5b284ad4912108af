use chrono::{Days, NaiveDate};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::finance::{InvoiceStatus, NewExpense, NewInvoice};
use crate::forms::{
    AmountError, empty_string_as_none, optional_multiline, optional_text, parse_amount_cents,
    sanitize_inline_text,
};

/// Payment terms applied when no due date is entered.
const DEFAULT_TERMS_DAYS: u64 = 30;
const INVOICE_NUMBER_MAX_LEN: u64 = 32;
const CATEGORY_MAX_LEN: u64 = 64;

pub type FinanceFormResult<T> = Result<T, FinanceFormError>;

#[derive(Debug, Error)]
pub enum FinanceFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("amount: {0}")]
    Amount(#[from] AmountError),
    #[error("due date must not be before the issue date")]
    DueBeforeIssue,
    #[error("expense category cannot be empty")]
    EmptyCategory,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceForm {
    /// Generated when left blank.
    #[validate(length(max = INVOICE_NUMBER_MAX_LEN))]
    pub invoice_number: Option<String>,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub order_id: Option<i32>,
    pub amount: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub due_date: Option<NaiveDate>,
}

impl InvoiceForm {
    pub fn into_new_invoice(self, today: NaiveDate) -> FinanceFormResult<NewInvoice> {
        self.validate()?;

        let amount_cents = parse_amount_cents(&self.amount)?;
        let issue_date = self.issue_date.unwrap_or(today);
        let due_date = self.due_date.unwrap_or_else(|| {
            issue_date
                .checked_add_days(Days::new(DEFAULT_TERMS_DAYS))
                .unwrap_or(issue_date)
        });
        if due_date < issue_date {
            return Err(FinanceFormError::DueBeforeIssue);
        }

        Ok(NewInvoice {
            invoice_number: optional_text(self.invoice_number.as_deref()),
            order_id: self.order_id,
            customer_id: self.customer_id,
            amount_cents,
            issue_date,
            due_date,
            status: InvoiceStatus::Unpaid,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExpenseForm {
    #[validate(length(min = 1, max = CATEGORY_MAX_LEN))]
    pub category: String,
    pub description: Option<String>,
    pub amount: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub expense_date: Option<NaiveDate>,
}

impl ExpenseForm {
    pub fn into_new_expense(
        self,
        today: NaiveDate,
        recorded_by: i32,
    ) -> FinanceFormResult<NewExpense> {
        self.validate()?;

        let category = sanitize_inline_text(&self.category);
        if category.is_empty() {
            return Err(FinanceFormError::EmptyCategory);
        }

        Ok(NewExpense {
            category,
            description: optional_multiline(self.description.as_deref()),
            amount_cents: parse_amount_cents(&self.amount)?,
            expense_date: self.expense_date.unwrap_or(today),
            recorded_by: Some(recorded_by),
        })
    }
}
