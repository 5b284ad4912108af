use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        equipment::{
            Equipment as DomainEquipment, EquipmentStatus, EquipmentView,
            NewEquipment as DomainNewEquipment, UpdateEquipment as DomainUpdateEquipment,
        },
    },
    models::equipment::{Equipment as DbEquipment, NewEquipment as DbNewEquipment},
    repository::{
        DieselRepository, EquipmentReader, EquipmentWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

impl EquipmentReader for DieselRepository {
    fn list_equipment(&self) -> RepositoryResult<Vec<EquipmentView>> {
        use crate::schema::{equipment, locations};

        let mut conn = self.conn()?;
        let rows = equipment::table
            .left_join(locations::table)
            .order(equipment::name.asc())
            .select((DbEquipment::as_select(), locations::name.nullable()))
            .load::<(DbEquipment, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(equipment, location_name)| EquipmentView {
                equipment: equipment.into(),
                location_name,
            })
            .collect())
    }

    fn list_equipment_with_status(
        &self,
        status: EquipmentStatus,
    ) -> RepositoryResult<Vec<DomainEquipment>> {
        use crate::schema::equipment;

        let mut conn = self.conn()?;
        let rows = equipment::table
            .filter(equipment::status.eq(status.as_str()))
            .order(equipment::name.asc())
            .select(DbEquipment::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl EquipmentWriter for DieselRepository {
    fn create_equipment(
        &self,
        new_equipment: &DomainNewEquipment,
        actor_id: i32,
    ) -> RepositoryResult<DomainEquipment> {
        use crate::schema::equipment;

        let mut conn = self.conn()?;
        let db_new = DbNewEquipment::from(new_equipment);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(equipment::table)
                .values(&db_new)
                .returning(DbEquipment::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Equipment, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("New equipment added: {}", created.name)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_equipment(
        &self,
        equipment_id: i32,
        updates: &DomainUpdateEquipment,
        actor_id: i32,
    ) -> RepositoryResult<DomainEquipment> {
        use crate::schema::equipment;

        let mut conn = self.conn()?;
        let changes = DbNewEquipment::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(equipment::table.filter(equipment::id.eq(equipment_id)))
                .set(&changes)
                .returning(DbEquipment::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Equipment, equipment_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!("Equipment #{equipment_id} updated.")),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_equipment(&self, equipment_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::equipment;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(equipment::table.filter(equipment::id.eq(equipment_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Equipment, equipment_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Equipment #{equipment_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
