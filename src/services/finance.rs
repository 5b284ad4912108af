use chrono::{Datelike, Months, NaiveDate};
use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::customer::{Customer, CustomerListQuery};
use crate::domain::finance::{
    Expense, ExpenseView, Invoice, InvoiceListQuery, InvoiceStatus, InvoiceView,
};
use crate::domain::order::{OrderStatus, OrderView};
use crate::forms::empty_string_as_none;
use crate::forms::finance::{ExpenseForm, InvoiceForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CustomerReader, FinanceReader, FinanceWriter, OrderReader};
use crate::services::{ServiceError, ServiceResult, today};

/// Query parameters accepted by the invoices page.
#[derive(Debug, Default, Deserialize)]
pub struct InvoicesQuery {
    /// Shows only invoices in this status.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<InvoiceStatus>,
    /// Page number requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the invoices page.
pub struct InvoicesPageData {
    /// Paginated invoices, newest first.
    pub invoices: Paginated<InvoiceView>,
    /// Status filter echoed back to the template.
    pub status: Option<InvoiceStatus>,
    /// Sum of unpaid and overdue invoices.
    pub outstanding_cents: i64,
    /// Customers offered by the new invoice form.
    pub customers: Vec<Customer>,
    /// Orders an invoice can be raised against.
    pub orders: Vec<OrderView>,
}

/// Data required to render the expenses page.
pub struct ExpensesPageData {
    /// Recorded expenses, newest first.
    pub expenses: Vec<ExpenseView>,
    /// First day of the month the total covers.
    pub month_start: NaiveDate,
    /// Expenses dated in the current month.
    pub month_total_cents: i64,
}

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day.with_day(1).unwrap_or(day);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day);
    (start, end)
}

pub fn load_invoices_page<R>(repo: &R, query: InvoicesQuery) -> ServiceResult<InvoicesPageData>
where
    R: FinanceReader + CustomerReader + OrderReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let mut list_query = InvoiceListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = query.status {
        list_query = list_query.status(status);
    }

    let (total, invoices) = repo.list_invoices(list_query).map_err(ServiceError::from)?;
    let outstanding_cents = repo
        .outstanding_total_cents()
        .map_err(ServiceError::from)?;
    let (_, customers) = repo
        .list_customers(CustomerListQuery::default())
        .map_err(ServiceError::from)?;
    let orders = repo
        .list_orders_with_status(OrderStatus::ALL)
        .map_err(ServiceError::from)?;

    Ok(InvoicesPageData {
        invoices: Paginated::from_total(invoices, page, total, DEFAULT_ITEMS_PER_PAGE),
        status: query.status,
        outstanding_cents,
        customers,
        orders,
    })
}

/// Issues an invoice; a blank number is generated from the issue date.
pub fn create_invoice<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: InvoiceForm,
) -> ServiceResult<Invoice>
where
    R: FinanceWriter + ?Sized,
{
    let new_invoice = form
        .into_new_invoice(today())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_invoice(&new_invoice, user.user_id)
        .map_err(ServiceError::from)
}

/// Paying an already paid invoice is rejected as a form error.
pub fn pay_invoice<R>(repo: &R, user: &AuthenticatedUser, invoice_id: i32) -> ServiceResult<Invoice>
where
    R: FinanceWriter + ?Sized,
{
    repo.pay_invoice(invoice_id, user.user_id)
        .map_err(ServiceError::from)
}

pub fn delete_invoice<R>(repo: &R, user: &AuthenticatedUser, invoice_id: i32) -> ServiceResult<()>
where
    R: FinanceWriter + ?Sized,
{
    repo.delete_invoice(invoice_id, user.user_id)
        .map_err(ServiceError::from)
}

pub fn load_expenses_page<R>(repo: &R) -> ServiceResult<ExpensesPageData>
where
    R: FinanceReader + ?Sized,
{
    let (month_start, month_end) = month_bounds(today());
    let expenses = repo.list_expenses().map_err(ServiceError::from)?;
    let month_total_cents = repo
        .expenses_total_cents(month_start, month_end)
        .map_err(ServiceError::from)?;

    Ok(ExpensesPageData {
        expenses,
        month_start,
        month_total_cents,
    })
}

pub fn create_expense<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: ExpenseForm,
) -> ServiceResult<Expense>
where
    R: FinanceWriter + ?Sized,
{
    let new_expense = form
        .into_new_expense(today(), user.user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_expense(&new_expense)
        .map_err(ServiceError::from)
}

pub fn delete_expense<R>(repo: &R, expense_id: i32) -> ServiceResult<()>
where
    R: FinanceWriter + ?Sized,
{
    repo.delete_expense(expense_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::services::test_support::{FakeRepo, date, operator};

    fn invoice(id: i32, status: InvoiceStatus) -> Invoice {
        Invoice {
            id,
            invoice_number: "INV-20250602-1".to_string(),
            order_id: Some(31),
            customer_id: 1,
            amount_cents: 6_500_000,
            issue_date: date(2025, 6, 2),
            due_date: date(2025, 7, 2),
            status,
            paid_at: None,
        }
    }

    #[test]
    fn month_bounds_cover_whole_month() {
        assert_eq!(
            month_bounds(date(2024, 2, 17)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_bounds(date(2025, 12, 31)),
            (date(2025, 12, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn invoices_page_reports_outstanding_total() {
        let mut repo = FakeRepo::default();
        repo.finance_reader
            .expect_list_invoices()
            .withf(|query| query.status == Some(InvoiceStatus::Unpaid))
            .returning(|_| Ok((1, Vec::new())));
        repo.finance_reader
            .expect_outstanding_total_cents()
            .returning(|| Ok(6_500_000));
        repo.customer_reader
            .expect_list_customers()
            .returning(|_| Ok((0, Vec::new())));
        repo.order_reader
            .expect_list_orders_with_status()
            .returning(|_| Ok(Vec::new()));

        let data = load_invoices_page(
            &repo,
            InvoicesQuery {
                status: Some(InvoiceStatus::Unpaid),
                page: None,
            },
        )
        .expect("page");

        assert_eq!(data.outstanding_cents, 6_500_000);
    }

    #[test]
    fn create_invoice_starts_unpaid() {
        let mut repo = FakeRepo::default();
        repo.finance_writer
            .expect_create_invoice()
            .withf(|invoice, _| {
                invoice.status == InvoiceStatus::Unpaid
                    && invoice.amount_cents == 6_500_000
                    && invoice.invoice_number.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(invoice(1, InvoiceStatus::Unpaid)));

        let form = InvoiceForm {
            invoice_number: Some(String::new()),
            customer_id: 1,
            order_id: Some(31),
            amount: "65000".to_string(),
            issue_date: None,
            due_date: None,
        };

        assert!(create_invoice(&repo, &operator(), form).is_ok());
    }

    #[test]
    fn paying_twice_is_a_form_error() {
        let mut repo = FakeRepo::default();
        repo.finance_writer.expect_pay_invoice().returning(|_, _| {
            Err(RepositoryError::InvalidState(
                "Invoice is already paid".to_string(),
            ))
        });

        let result = pay_invoice(&repo, &operator(), 1);

        assert!(matches!(
            result,
            Err(ServiceError::Form(message)) if message == "Invoice is already paid"
        ));
    }

    #[test]
    fn expense_is_recorded_by_session_user() {
        let mut repo = FakeRepo::default();
        repo.finance_writer
            .expect_create_expense()
            .withf(|expense| expense.recorded_by == Some(7) && expense.amount_cents == 1_250_050)
            .times(1)
            .returning(|expense| {
                Ok(Expense {
                    id: 3,
                    category: expense.category.clone(),
                    description: None,
                    amount_cents: expense.amount_cents,
                    expense_date: expense.expense_date,
                    recorded_by: expense.recorded_by,
                })
            });

        let form = ExpenseForm {
            category: "Diesel".to_string(),
            description: None,
            amount: "12500.50".to_string(),
            expense_date: Some(date(2025, 6, 3)),
        };

        assert!(create_expense(&repo, &operator(), form).is_ok());
    }
}
