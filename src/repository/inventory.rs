use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        inventory::{
            InventoryItem as DomainInventoryItem, InventoryView,
            NewInventoryItem as DomainNewInventoryItem,
            UpdateInventoryItem as DomainUpdateInventoryItem,
        },
    },
    models::inventory::{
        InventoryItem as DbInventoryItem, NewInventoryItem as DbNewInventoryItem,
        UpdateInventoryItem as DbUpdateInventoryItem,
    },
    repository::{
        DieselRepository, InventoryReader, InventoryWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

/// Resolve material `(name, unit)` pairs for the given ids.
pub(crate) fn material_names(
    conn: &mut SqliteConnection,
    ids: impl IntoIterator<Item = i32>,
) -> QueryResult<HashMap<i32, (String, String)>> {
    use crate::schema::inventory_items;

    let ids: Vec<i32> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = inventory_items::table
        .filter(inventory_items::id.eq_any(&ids))
        .select((inventory_items::id, inventory_items::name, inventory_items::unit))
        .load::<(i32, String, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, name, unit)| (id, (name, unit)))
        .collect())
}

impl InventoryReader for DieselRepository {
    fn get_inventory_item(&self, id: i32) -> RepositoryResult<Option<DomainInventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let item = inventory_items::table
            .filter(inventory_items::id.eq(id))
            .select(DbInventoryItem::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_inventory(&self) -> RepositoryResult<Vec<InventoryView>> {
        use crate::schema::{inventory_items, suppliers};

        let mut conn = self.conn()?;
        let rows = inventory_items::table
            .left_join(suppliers::table)
            .order(inventory_items::name.asc())
            .select((DbInventoryItem::as_select(), suppliers::name.nullable()))
            .load::<(DbInventoryItem, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(item, supplier_name)| InventoryView::new(item.into(), supplier_name))
            .collect())
    }

    fn list_low_stock(&self) -> RepositoryResult<Vec<DomainInventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let rows = inventory_items::table
            .filter(inventory_items::current_stock.le(inventory_items::threshold))
            .select(DbInventoryItem::as_select())
            .load(&mut conn)?;

        let mut items: Vec<DomainInventoryItem> = rows.into_iter().map(Into::into).collect();
        items.sort_by(|a, b| a.stock_ratio().total_cmp(&b.stock_ratio()));

        Ok(items)
    }
}

impl InventoryWriter for DieselRepository {
    fn create_inventory_item(
        &self,
        new_item: &DomainNewInventoryItem,
        actor_id: i32,
    ) -> RepositoryResult<DomainInventoryItem> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let db_new = DbNewInventoryItem::from(new_item);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(inventory_items::table)
                .values(&db_new)
                .returning(DbInventoryItem::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Inventory, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("New material added: {}", created.name)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &DomainUpdateInventoryItem,
        actor_id: i32,
    ) -> RepositoryResult<DomainInventoryItem> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let changes = DbUpdateInventoryItem::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated =
                diesel::update(inventory_items::table.filter(inventory_items::id.eq(item_id)))
                    .set(&changes)
                    .returning(DbInventoryItem::as_returning())
                    .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Inventory, item_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!(
                        "Material {} updated, stock {} {}",
                        updated.name, updated.current_stock, updated.unit
                    )),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_inventory_item(&self, item_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted =
                diesel::delete(inventory_items::table.filter(inventory_items::id.eq(item_id)))
                    .execute(conn)
                    .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Inventory, item_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Material #{item_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
