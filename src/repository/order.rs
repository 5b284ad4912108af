use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        integration::{IntegrationEventType, NewIntegrationEvent, ORDER_CREATED_DETAILS},
        order::{
            NewOrder as DomainNewOrder, Order as DomainOrder, OrderDetails, OrderListQuery,
            OrderStatus, OrderView, UpdateOrder as DomainUpdateOrder,
        },
    },
    models::{
        customer::Customer as DbCustomer,
        order::{NewOrder as DbNewOrder, Order as DbOrder, UpdateOrder as DbUpdateOrder},
        product::Product as DbProduct,
    },
    repository::{
        DieselRepository, OrderReader, OrderWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
        integration::append_event,
    },
};

fn into_view((order, customer_name, product_name): (DbOrder, String, String)) -> OrderView {
    OrderView {
        order: order.into(),
        customer_name,
        product_name,
    }
}

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .select(DbOrder::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn get_order_details(&self, id: i32) -> RepositoryResult<Option<OrderDetails>> {
        use crate::schema::{customers, orders, products};

        let mut conn = self.conn()?;
        let row = orders::table
            .inner_join(customers::table)
            .inner_join(products::table)
            .filter(orders::id.eq(id))
            .select((
                DbOrder::as_select(),
                DbCustomer::as_select(),
                DbProduct::as_select(),
            ))
            .first::<(DbOrder, DbCustomer, DbProduct)>(&mut conn)
            .optional()?;

        Ok(row.map(|(order, customer, product)| OrderDetails {
            order: order.into(),
            customer: customer.into(),
            product: product.into(),
        }))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<OrderView>)> {
        use crate::schema::{customers, orders, products};

        let mut conn = self.conn()?;

        let OrderListQuery {
            status,
            search,
            pagination,
        } = query;

        let status_filter = status.map(|status| status.as_str());
        let search_pattern = search.as_ref().map(|term| format!("%{term}%"));

        let mut count_query = orders::table
            .inner_join(customers::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status_value) = status_filter {
            count_query = count_query.filter(orders::status.eq(status_value));
        }

        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                orders::delivery_site
                    .like(pattern.clone())
                    .or(customers::name.like(pattern.clone())),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = orders::table
            .inner_join(customers::table)
            .inner_join(products::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status_value) = status_filter {
            items = items.filter(orders::status.eq(status_value));
        }

        if let Some(ref pattern) = search_pattern {
            items = items.filter(
                orders::delivery_site
                    .like(pattern.clone())
                    .or(customers::name.like(pattern.clone())),
            );
        }

        items = items.order((orders::order_date.desc(), orders::id.desc()));

        if let Some(pagination) = pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let rows = items
            .select((DbOrder::as_select(), customers::name, products::name))
            .load::<(DbOrder, String, String)>(&mut conn)?;

        Ok((total, rows.into_iter().map(into_view).collect()))
    }

    fn list_orders_with_status(
        &self,
        statuses: &[OrderStatus],
    ) -> RepositoryResult<Vec<OrderView>> {
        use crate::schema::{customers, orders, products};

        let labels: Vec<&str> = statuses.iter().map(|status| status.as_str()).collect();

        let mut conn = self.conn()?;
        let rows = orders::table
            .inner_join(customers::table)
            .inner_join(products::table)
            .filter(orders::status.eq_any(&labels))
            .order((orders::scheduled_date.asc(), orders::id.asc()))
            .select((DbOrder::as_select(), customers::name, products::name))
            .load::<(DbOrder, String, String)>(&mut conn)?;

        Ok(rows.into_iter().map(into_view).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(
        &self,
        new_order: &DomainNewOrder,
        actor_id: i32,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_new = DbNewOrder::from(new_order);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .returning(DbOrder::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Order, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("New order created for quantity {}", created.quantity)),
            )?;

            append_event(
                conn,
                &NewIntegrationEvent::new(IntegrationEventType::OrderCreated)
                    .order(created.id)
                    .details(ORDER_CREATED_DETAILS),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
        actor_id: i32,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let changes = DbUpdateOrder::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
                .set(&changes)
                .returning(DbOrder::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Order, order_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!("Order #{order_id} updated.")),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(orders::table.filter(orders::id.eq(order_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Order, order_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Order #{order_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
