use std::collections::HashMap;

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        finance::{
            Expense as DomainExpense, ExpenseView, Invoice as DomainInvoice, InvoiceListQuery,
            InvoiceStatus, InvoiceView, NewExpense as DomainNewExpense,
            NewInvoice as DomainNewInvoice, invoice_number,
        },
    },
    models::finance::{
        Expense as DbExpense, Invoice as DbInvoice, NewExpense as DbNewExpense,
        NewInvoice as DbNewInvoice,
    },
    repository::{
        DieselRepository, FinanceReader, FinanceWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
        now,
    },
};

/// Employee names of user accounts keyed by user id.
fn user_display_names(
    conn: &mut SqliteConnection,
    user_ids: impl IntoIterator<Item = i32>,
) -> QueryResult<HashMap<i32, String>> {
    use crate::schema::{employees, users};

    let ids: Vec<i32> = user_ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(users::table
        .inner_join(employees::table)
        .filter(users::id.eq_any(&ids))
        .select((users::id, employees::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect())
}

impl FinanceReader for DieselRepository {
    fn list_invoices(
        &self,
        query: InvoiceListQuery,
    ) -> RepositoryResult<(usize, Vec<InvoiceView>)> {
        use crate::schema::{customers, invoices};

        let mut conn = self.conn()?;

        let status_filter = query.status.map(|status| status.as_str());

        let mut count_query = invoices::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(status) = status_filter {
            count_query = count_query.filter(invoices::status.eq(status));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = invoices::table
            .inner_join(customers::table)
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(status) = status_filter {
            items = items.filter(invoices::status.eq(status));
        }
        items = items.order((invoices::issue_date.desc(), invoices::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let rows = items
            .select((DbInvoice::as_select(), customers::name))
            .load::<(DbInvoice, String)>(&mut conn)?;

        let invoices = rows
            .into_iter()
            .map(|(invoice, customer_name)| InvoiceView {
                invoice: invoice.into(),
                customer_name,
            })
            .collect();

        Ok((total, invoices))
    }

    fn outstanding_total_cents(&self) -> RepositoryResult<i64> {
        use crate::schema::invoices;

        let outstanding: Vec<&str> = InvoiceStatus::OUTSTANDING
            .iter()
            .map(|status| status.as_str())
            .collect();

        let mut conn = self.conn()?;
        let amounts = invoices::table
            .filter(invoices::status.eq_any(&outstanding))
            .select(invoices::amount_cents)
            .load::<i64>(&mut conn)?;

        Ok(amounts.into_iter().sum())
    }

    fn list_expenses(&self) -> RepositoryResult<Vec<ExpenseView>> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let rows = expenses::table
            .order((expenses::expense_date.desc(), expenses::id.desc()))
            .select(DbExpense::as_select())
            .load(&mut conn)?;

        let names = user_display_names(&mut conn, rows.iter().filter_map(|row| row.recorded_by))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let recorded_by_name = row.recorded_by.and_then(|id| names.get(&id).cloned());
                ExpenseView {
                    expense: row.into(),
                    recorded_by_name,
                }
            })
            .collect())
    }

    fn expenses_total_cents(&self, from: NaiveDate, to: NaiveDate) -> RepositoryResult<i64> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let amounts = expenses::table
            .filter(expenses::expense_date.ge(from))
            .filter(expenses::expense_date.le(to))
            .select(expenses::amount_cents)
            .load::<i64>(&mut conn)?;

        Ok(amounts.into_iter().sum())
    }
}

impl FinanceWriter for DieselRepository {
    fn create_invoice(
        &self,
        new_invoice: &DomainNewInvoice,
        actor_id: i32,
    ) -> RepositoryResult<DomainInvoice> {
        use crate::schema::invoices;

        let mut conn = self.conn()?;

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let number = match &new_invoice.invoice_number {
                Some(number) => number.clone(),
                None => {
                    let last_id = invoices::table
                        .select(diesel::dsl::max(invoices::id))
                        .first::<Option<i32>>(conn)?;
                    invoice_number(new_invoice.issue_date, last_id.unwrap_or(0) + 1)
                }
            };

            let created = diesel::insert_into(invoices::table)
                .values(DbNewInvoice {
                    invoice_number: &number,
                    order_id: new_invoice.order_id,
                    customer_id: new_invoice.customer_id,
                    amount_cents: new_invoice.amount_cents,
                    issue_date: new_invoice.issue_date,
                    due_date: new_invoice.due_date,
                    status: new_invoice.status.as_str(),
                })
                .returning(DbInvoice::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Invoice, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("Invoice {} issued.", created.invoice_number)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn pay_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<DomainInvoice> {
        use crate::schema::invoices;

        let mut conn = self.conn()?;

        let paid = conn.transaction::<_, RepositoryError, _>(|conn| {
            let paid = diesel::update(
                invoices::table
                    .filter(invoices::id.eq(invoice_id))
                    .filter(invoices::status.ne(InvoiceStatus::Paid.as_str())),
            )
            .set((
                invoices::status.eq(InvoiceStatus::Paid.as_str()),
                invoices::paid_at.eq(Some(now())),
            ))
            .returning(DbInvoice::as_returning())
            .get_result(conn)
            .optional()?;

            let Some(paid) = paid else {
                let exists = invoices::table
                    .filter(invoices::id.eq(invoice_id))
                    .count()
                    .get_result::<i64>(conn)?;
                return Err(if exists > 0 {
                    RepositoryError::InvalidState("Invoice is already paid".to_string())
                } else {
                    RepositoryError::NotFound
                });
            };

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Invoice, invoice_id, AuditAction::Payment)
                    .by(actor_id)
                    .details(format!("Invoice {} marked as paid.", paid.invoice_number)),
            )?;

            Ok(paid)
        })?;

        Ok(paid.into())
    }

    fn delete_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::invoices;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(invoices::table.filter(invoices::id.eq(invoice_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Invoice, invoice_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Invoice #{invoice_id} deleted.")),
            )?;

            Ok(())
        })
    }

    fn create_expense(&self, new_expense: &DomainNewExpense) -> RepositoryResult<DomainExpense> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(expenses::table)
            .values(DbNewExpense::from(new_expense))
            .returning(DbExpense::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }

    fn delete_expense(&self, expense_id: i32) -> RepositoryResult<()> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(expenses::table.filter(expenses::id.eq(expense_id)))
            .execute(&mut conn)
            .map_err(still_referenced)?;

        ensure_affected(deleted)
    }
}
