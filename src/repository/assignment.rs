use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::assignment::{
        AssignmentView, NewAssignment as DomainNewAssignment,
        UpdateAssignment as DomainUpdateAssignment,
    },
    models::{
        assignment::{
            Assignment as DbAssignment, NewAssignment as DbNewAssignment,
            UpdateAssignment as DbUpdateAssignment,
        },
        parse_label,
    },
    repository::{
        AssignmentReader, AssignmentWriter, DieselRepository, employee::employee_names,
        ensure_affected, errors::{RepositoryResult, still_referenced},
    },
};

/// Assignments with job, employee, vehicle and equipment names, newest
/// first. Restricted to one job card when `job_card_id` is given.
pub(crate) fn assignment_views(
    conn: &mut SqliteConnection,
    job_card_id: Option<i32>,
) -> QueryResult<Vec<AssignmentView>> {
    use crate::schema::{equipment, job_assignments, job_cards, vehicles};

    let mut query = job_assignments::table
        .inner_join(job_cards::table)
        .into_boxed::<diesel::sqlite::Sqlite>();
    if let Some(job_card_id) = job_card_id {
        query = query.filter(job_assignments::job_card_id.eq(job_card_id));
    }

    let rows = query
        .order(job_assignments::id.desc())
        .select((
            DbAssignment::as_select(),
            job_cards::job_type,
            job_cards::description,
            job_cards::status,
        ))
        .load::<(DbAssignment, String, String, String)>(conn)?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let employees = employee_names(conn, rows.iter().filter_map(|(row, ..)| row.employee_id))?;

    let vehicle_ids: Vec<i32> = rows.iter().filter_map(|(row, ..)| row.vehicle_id).collect();
    let vehicles: HashMap<i32, (String, String)> = vehicles::table
        .filter(vehicles::id.eq_any(&vehicle_ids))
        .select((vehicles::id, vehicles::name, vehicles::registration_no))
        .load::<(i32, String, String)>(conn)?
        .into_iter()
        .map(|(id, name, registration)| (id, (name, registration)))
        .collect();

    let equipment_ids: Vec<i32> = rows.iter().filter_map(|(row, ..)| row.equipment_id).collect();
    let equipment: HashMap<i32, String> = equipment::table
        .filter(equipment::id.eq_any(&equipment_ids))
        .select((equipment::id, equipment::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    Ok(rows
        .into_iter()
        .map(|(row, job_type, job_description, job_status)| {
            let employee_name = row.employee_id.and_then(|id| employees.get(&id).cloned());
            let vehicle = row.vehicle_id.and_then(|id| vehicles.get(&id).cloned());
            let equipment_name = row.equipment_id.and_then(|id| equipment.get(&id).cloned());
            AssignmentView {
                assignment: row.into(),
                job_type,
                job_description,
                job_status: parse_label(&job_status),
                employee_name,
                vehicle_name: vehicle.as_ref().map(|(name, _)| name.clone()),
                vehicle_registration: vehicle.map(|(_, registration)| registration),
                equipment_name,
            }
        })
        .collect())
}

impl AssignmentReader for DieselRepository {
    fn list_assignments(&self) -> RepositoryResult<Vec<AssignmentView>> {
        let mut conn = self.conn()?;
        Ok(assignment_views(&mut conn, None)?)
    }
}

impl AssignmentWriter for DieselRepository {
    fn create_assignment(&self, new_assignment: &DomainNewAssignment) -> RepositoryResult<i32> {
        use crate::schema::job_assignments;

        let mut conn = self.conn()?;
        let id = diesel::insert_into(job_assignments::table)
            .values(DbNewAssignment::from(new_assignment))
            .returning(job_assignments::id)
            .get_result::<i32>(&mut conn)?;

        Ok(id)
    }

    fn update_assignment(
        &self,
        assignment_id: i32,
        updates: &DomainUpdateAssignment,
    ) -> RepositoryResult<()> {
        use crate::schema::job_assignments;

        let mut conn = self.conn()?;
        let updated = diesel::update(
            job_assignments::table.filter(job_assignments::id.eq(assignment_id)),
        )
        .set(DbUpdateAssignment::from(updates))
        .execute(&mut conn)?;

        ensure_affected(updated)
    }

    fn delete_assignment(&self, assignment_id: i32) -> RepositoryResult<()> {
        use crate::schema::job_assignments;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            job_assignments::table.filter(job_assignments::id.eq(assignment_id)),
        )
        .execute(&mut conn)
        .map_err(still_referenced)?;

        ensure_affected(deleted)
    }
}
