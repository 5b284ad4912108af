use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::finance::{
    Expense as DomainExpense, Invoice as DomainInvoice, NewExpense as DomainNewExpense,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct Invoice {
    pub id: i32,
    pub invoice_number: String,
    pub order_id: Option<i32>,
    pub customer_id: i32,
    pub amount_cents: i64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub paid_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice<'a> {
    pub invoice_number: &'a str,
    pub order_id: Option<i32>,
    pub customer_id: i32,
    pub amount_cents: i64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::expenses)]
pub struct Expense {
    pub id: i32,
    pub category: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub expense_date: NaiveDate,
    pub recorded_by: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpense<'a> {
    pub category: &'a str,
    pub description: Option<&'a str>,
    pub amount_cents: i64,
    pub expense_date: NaiveDate,
    pub recorded_by: Option<i32>,
}

impl From<Invoice> for DomainInvoice {
    fn from(value: Invoice) -> Self {
        Self {
            id: value.id,
            invoice_number: value.invoice_number,
            order_id: value.order_id,
            customer_id: value.customer_id,
            amount_cents: value.amount_cents,
            issue_date: value.issue_date,
            due_date: value.due_date,
            status: parse_label(&value.status),
            paid_at: value.paid_at,
        }
    }
}

impl From<Expense> for DomainExpense {
    fn from(value: Expense) -> Self {
        Self {
            id: value.id,
            category: value.category,
            description: value.description,
            amount_cents: value.amount_cents,
            expense_date: value.expense_date,
            recorded_by: value.recorded_by,
        }
    }
}

impl<'a> From<&'a DomainNewExpense> for NewExpense<'a> {
    fn from(value: &'a DomainNewExpense) -> Self {
        Self {
            category: value.category.as_str(),
            description: value.description.as_deref(),
            amount_cents: value.amount_cents,
            expense_date: value.expense_date,
            recorded_by: value.recorded_by,
        }
    }
}
