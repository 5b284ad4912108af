use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::pagination::Pagination;

labeled_enum! {
    pub enum InvoiceStatus {
        Unpaid => "Unpaid",
        Paid => "Paid",
        Overdue => "Overdue",
        Cancelled => "Cancelled",
    }
    default = Unpaid;
}

impl InvoiceStatus {
    /// Statuses whose amount still counts as receivable.
    pub const OUTSTANDING: &'static [InvoiceStatus] =
        &[InvoiceStatus::Unpaid, InvoiceStatus::Overdue];
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub invoice_number: String,
    pub order_id: Option<i32>,
    pub customer_id: i32,
    pub amount_cents: i64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub paid_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InvoiceView {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub customer_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    /// Generated from the issue date when `None`.
    pub invoice_number: Option<String>,
    pub order_id: Option<i32>,
    pub customer_id: i32,
    pub amount_cents: i64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}

/// Invoice number in the form `INV-20250614-17`.
pub fn invoice_number(issue_date: NaiveDate, sequence: i32) -> String {
    format!("INV-{}-{}", issue_date.format("%Y%m%d"), sequence)
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceListQuery {
    pub status: Option<InvoiceStatus>,
    pub pagination: Option<Pagination>,
}

impl InvoiceListQuery {
    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub category: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub expense_date: NaiveDate,
    pub recorded_by: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExpenseView {
    #[serde(flatten)]
    pub expense: Expense,
    pub recorded_by_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub expense_date: NaiveDate,
    pub recorded_by: Option<i32>,
}
