use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        procurement::{
            NewPurchaseOrder as DomainNewPurchaseOrder, NewSupplier as DomainNewSupplier,
            PurchaseOrder as DomainPurchaseOrder, PurchaseOrderStatus, PurchaseOrderView,
            Supplier as DomainSupplier, UpdateSupplier as DomainUpdateSupplier,
        },
    },
    models::procurement::{
        NewPurchaseOrder as DbNewPurchaseOrder, NewSupplier as DbNewSupplier,
        PurchaseOrder as DbPurchaseOrder, Supplier as DbSupplier,
    },
    repository::{
        DieselRepository, PurchaseOrderReader, PurchaseOrderWriter, SupplierReader,
        SupplierWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
        now, today,
    },
};

impl SupplierReader for DieselRepository {
    fn list_suppliers(&self) -> RepositoryResult<Vec<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let rows = suppliers::table
            .order(suppliers::name.asc())
            .select(DbSupplier::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(
        &self,
        new_supplier: &DomainNewSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(suppliers::table)
            .values(DbNewSupplier::from(new_supplier))
            .returning(DbSupplier::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &DomainUpdateSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let updated = diesel::update(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .set(DbNewSupplier::from(updates))
            .returning(DbSupplier::as_returning())
            .get_result(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .execute(&mut conn)
            .map_err(still_referenced)?;

        ensure_affected(deleted)
    }
}

impl PurchaseOrderReader for DieselRepository {
    fn list_purchase_orders(&self) -> RepositoryResult<Vec<PurchaseOrderView>> {
        use crate::schema::{inventory_items, purchase_orders, suppliers};

        let mut conn = self.conn()?;
        let rows = purchase_orders::table
            .inner_join(suppliers::table)
            .inner_join(inventory_items::table)
            .order((purchase_orders::order_date.desc(), purchase_orders::id.desc()))
            .select((
                DbPurchaseOrder::as_select(),
                suppliers::name,
                inventory_items::name,
                inventory_items::unit,
            ))
            .load::<(DbPurchaseOrder, String, String, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(order, supplier_name, material_name, unit)| {
                let order = DomainPurchaseOrder::from(order);
                let total_cents = order.total_cents();
                PurchaseOrderView {
                    order,
                    supplier_name,
                    material_name,
                    unit,
                    total_cents,
                }
            })
            .collect())
    }
}

impl PurchaseOrderWriter for DieselRepository {
    fn create_purchase_order(
        &self,
        new_order: &DomainNewPurchaseOrder,
        actor_id: i32,
    ) -> RepositoryResult<DomainPurchaseOrder> {
        use crate::schema::purchase_orders;

        let mut conn = self.conn()?;
        let db_new = DbNewPurchaseOrder::from(new_order);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(purchase_orders::table)
                .values(&db_new)
                .returning(DbPurchaseOrder::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::PurchaseOrder, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("Purchase order placed for quantity {}", created.quantity)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn receive_purchase_order(
        &self,
        order_id: i32,
        actor_id: i32,
    ) -> RepositoryResult<DomainPurchaseOrder> {
        use crate::schema::{inventory_items, purchase_orders};

        let mut conn = self.conn()?;

        let received = conn.transaction::<_, RepositoryError, _>(|conn| {
            let received = diesel::update(
                purchase_orders::table
                    .filter(purchase_orders::id.eq(order_id))
                    .filter(purchase_orders::status.ne(PurchaseOrderStatus::Received.as_str())),
            )
            .set((
                purchase_orders::status.eq(PurchaseOrderStatus::Received.as_str()),
                purchase_orders::received_at.eq(Some(now())),
            ))
            .returning(DbPurchaseOrder::as_returning())
            .get_result(conn)
            .optional()?;

            let Some(received) = received else {
                let exists = purchase_orders::table
                    .filter(purchase_orders::id.eq(order_id))
                    .count()
                    .get_result::<i64>(conn)?;
                return Err(if exists > 0 {
                    RepositoryError::InvalidState("Purchase order already received".to_string())
                } else {
                    RepositoryError::NotFound
                });
            };

            diesel::update(
                inventory_items::table.filter(inventory_items::id.eq(received.material_id)),
            )
            .set((
                inventory_items::current_stock
                    .eq(inventory_items::current_stock + received.quantity),
                inventory_items::last_updated.eq(today()),
            ))
            .execute(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::PurchaseOrder, order_id, AuditAction::Receive)
                    .by(actor_id)
                    .details(format!(
                        "Received {} into material #{}",
                        received.quantity, received.material_id
                    )),
            )?;

            Ok(received)
        })?;

        Ok(received.into())
    }

    fn delete_purchase_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::purchase_orders;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted =
                diesel::delete(purchase_orders::table.filter(purchase_orders::id.eq(order_id)))
                    .execute(conn)
                    .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::PurchaseOrder, order_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Purchase order #{order_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
