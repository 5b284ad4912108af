use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        job_card::JobStatus,
        vehicle::{
            NewVehicle as DomainNewVehicle, UpdateVehicle as DomainUpdateVehicle,
            Vehicle as DomainVehicle, VehicleStatus, VehicleView,
        },
    },
    models::vehicle::{NewVehicle as DbNewVehicle, Vehicle as DbVehicle},
    repository::{
        DieselRepository, VehicleReader, VehicleWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

impl VehicleReader for DieselRepository {
    fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<DomainVehicle>> {
        use crate::schema::vehicles;

        let mut conn = self.conn()?;
        let vehicle = vehicles::table
            .filter(vehicles::id.eq(id))
            .select(DbVehicle::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(vehicle.map(Into::into))
    }

    fn list_vehicles(&self) -> RepositoryResult<Vec<VehicleView>> {
        use crate::schema::{job_assignments, job_cards, vehicles};

        let mut conn = self.conn()?;
        let rows = vehicles::table
            .order(vehicles::name.asc())
            .select(DbVehicle::as_select())
            .load(&mut conn)?;

        let active: Vec<&str> = JobStatus::ACTIVE.iter().map(|status| status.as_str()).collect();
        let open_jobs = job_assignments::table
            .inner_join(job_cards::table)
            .filter(job_assignments::vehicle_id.is_not_null())
            .filter(job_cards::status.eq_any(&active))
            .order(job_cards::id.desc())
            .select((job_assignments::vehicle_id, job_cards::id, job_cards::job_type))
            .load::<(Option<i32>, i32, String)>(&mut conn)?;

        // Newest open job wins when a vehicle is on several.
        let mut current_jobs: HashMap<i32, (i32, String)> = HashMap::new();
        for (vehicle_id, job_id, job_type) in open_jobs {
            if let Some(vehicle_id) = vehicle_id {
                current_jobs.entry(vehicle_id).or_insert((job_id, job_type));
            }
        }

        Ok(rows
            .into_iter()
            .map(|vehicle| {
                let current = current_jobs.get(&vehicle.id).cloned();
                VehicleView {
                    vehicle: vehicle.into(),
                    current_job_id: current.as_ref().map(|(id, _)| *id),
                    current_job_type: current.map(|(_, job_type)| job_type),
                }
            })
            .collect())
    }

    fn list_vehicles_with_status(
        &self,
        status: VehicleStatus,
    ) -> RepositoryResult<Vec<DomainVehicle>> {
        use crate::schema::vehicles;

        let mut conn = self.conn()?;
        let rows = vehicles::table
            .filter(vehicles::status.eq(status.as_str()))
            .order(vehicles::name.asc())
            .select(DbVehicle::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl VehicleWriter for DieselRepository {
    fn create_vehicle(
        &self,
        new_vehicle: &DomainNewVehicle,
        actor_id: i32,
    ) -> RepositoryResult<DomainVehicle> {
        use crate::schema::vehicles;

        let mut conn = self.conn()?;
        let db_new = DbNewVehicle::from(new_vehicle);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(vehicles::table)
                .values(&db_new)
                .returning(DbVehicle::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Vehicle, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("New vehicle added: {}", created.registration_no)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_vehicle(
        &self,
        vehicle_id: i32,
        updates: &DomainUpdateVehicle,
        actor_id: i32,
    ) -> RepositoryResult<DomainVehicle> {
        use crate::schema::vehicles;

        let mut conn = self.conn()?;
        let changes = DbNewVehicle::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(vehicles::table.filter(vehicles::id.eq(vehicle_id)))
                .set(&changes)
                .returning(DbVehicle::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Vehicle, vehicle_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!("Vehicle #{vehicle_id} updated.")),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_vehicle(&self, vehicle_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::vehicles;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(vehicles::table.filter(vehicles::id.eq(vehicle_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Vehicle, vehicle_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Vehicle ID #{vehicle_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
