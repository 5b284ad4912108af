use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        customer::{
            Customer as DomainCustomer, CustomerListQuery, NewCustomer as DomainNewCustomer,
            UpdateCustomer as DomainUpdateCustomer,
        },
    },
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

pub(crate) fn customer_names(
    conn: &mut SqliteConnection,
    ids: impl IntoIterator<Item = i32>,
) -> QueryResult<HashMap<i32, String>> {
    use crate::schema::customers;

    let ids: Vec<i32> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = customers::table
        .filter(customers::id.eq_any(&ids))
        .select((customers::id, customers::name))
        .load::<(i32, String)>(conn)?;

    Ok(rows.into_iter().collect())
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::id.eq(id))
            .select(DbCustomer::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainCustomer>)> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let mut count_query = customers::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pattern) = pattern.as_ref() {
            count_query = count_query.filter(
                customers::name
                    .like(pattern.clone())
                    .or(customers::email.like(pattern.clone()))
                    .or(customers::phone.like(pattern.clone())),
            );
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = customers::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pattern) = pattern.as_ref() {
            items = items.filter(
                customers::name
                    .like(pattern.clone())
                    .or(customers::email.like(pattern.clone()))
                    .or(customers::phone.like(pattern.clone())),
            );
        }
        items = items.order(customers::name.asc());

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let rows = items.select(DbCustomer::as_select()).load(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(
        &self,
        new_customer: &DomainNewCustomer,
        actor_id: i32,
    ) -> RepositoryResult<DomainCustomer> {
        let mut conn = self.conn()?;

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            insert_customer(conn, new_customer, actor_id)
        })?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &DomainUpdateCustomer,
        actor_id: i32,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let changes = DbUpdateCustomer::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(customers::table.filter(customers::id.eq(customer_id)))
                .set(&changes)
                .returning(DbCustomer::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Customer, customer_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!("Customer #{customer_id} updated.")),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_customer(&self, customer_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(customers::table.filter(customers::id.eq(customer_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Customer, customer_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Customer #{customer_id} deleted.")),
            )?;

            Ok(())
        })
    }
}

/// Insert a customer and its audit row on an open transaction.
pub(crate) fn insert_customer(
    conn: &mut SqliteConnection,
    new_customer: &DomainNewCustomer,
    actor_id: i32,
) -> RepositoryResult<DbCustomer> {
    use crate::schema::customers;

    let created = diesel::insert_into(customers::table)
        .values(DbNewCustomer::from(new_customer))
        .returning(DbCustomer::as_returning())
        .get_result(conn)?;

    append_audit(
        conn,
        &NewAuditEntry::new(AuditEntity::Customer, created.id, AuditAction::Create)
            .by(actor_id)
            .details(format!("New customer added: {}", created.name)),
    )?;

    Ok(created)
}
