use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        product::{
            NewProduct as DomainNewProduct, Product as DomainProduct,
            UpdateProduct as DomainUpdateProduct,
        },
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductReader, ProductWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .select(DbProduct::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let rows = products::table
            .order(products::name.asc())
            .select(DbProduct::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        new_product: &DomainNewProduct,
        actor_id: i32,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .returning(DbProduct::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Product, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("New product added: {}", created.name)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
        actor_id: i32,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes = DbUpdateProduct::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
                .set(&changes)
                .returning(DbProduct::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Product, product_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!("Product #{product_id} updated.")),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Product, product_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Product #{product_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
