use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        employee::{
            Employee as DomainEmployee, EmployeeStatus, EmployeeView,
            NewEmployee as DomainNewEmployee, UpdateEmployee as DomainUpdateEmployee,
        },
    },
    models::employee::{
        Employee as DbEmployee, NewEmployee as DbNewEmployee, UpdateEmployee as DbUpdateEmployee,
    },
    repository::{
        DieselRepository, EmployeeReader, EmployeeWriter, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

/// Resolve employee names for the given ids in one query.
pub(crate) fn employee_names(
    conn: &mut SqliteConnection,
    ids: impl IntoIterator<Item = i32>,
) -> QueryResult<HashMap<i32, String>> {
    use crate::schema::employees;

    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = employees::table
        .filter(employees::id.eq_any(&ids))
        .select((employees::id, employees::name))
        .load::<(i32, String)>(conn)?;

    Ok(rows.into_iter().collect())
}

/// Attach role and department names to employee rows.
pub(crate) fn employee_views(
    conn: &mut SqliteConnection,
    employees: Vec<DbEmployee>,
) -> QueryResult<Vec<EmployeeView>> {
    use crate::schema::{departments, roles};

    let roles: HashMap<i32, String> = roles::table
        .select((roles::id, roles::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();
    let departments: HashMap<i32, String> = departments::table
        .select((departments::id, departments::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    Ok(employees
        .into_iter()
        .map(|employee| {
            let role_name = employee.role_id.and_then(|id| roles.get(&id).cloned());
            let department_name = employee
                .department_id
                .and_then(|id| departments.get(&id).cloned());
            EmployeeView {
                employee: employee.into(),
                role_name,
                department_name,
            }
        })
        .collect())
}

/// Insert an employee and its audit row on an open transaction.
pub(crate) fn insert_employee(
    conn: &mut SqliteConnection,
    new_employee: &DomainNewEmployee,
    actor_id: i32,
) -> RepositoryResult<DbEmployee> {
    use crate::schema::employees;

    let created = diesel::insert_into(employees::table)
        .values(&DbNewEmployee::from(new_employee))
        .returning(DbEmployee::as_returning())
        .get_result(conn)?;

    append_audit(
        conn,
        &NewAuditEntry::new(AuditEntity::Employee, created.id, AuditAction::Create)
            .by(actor_id)
            .details(format!("New employee added: {}", created.name)),
    )?;

    Ok(created)
}

impl EmployeeReader for DieselRepository {
    fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<DomainEmployee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let employee = employees::table
            .filter(employees::id.eq(id))
            .select(DbEmployee::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(employee.map(Into::into))
    }

    fn list_employees(&self) -> RepositoryResult<Vec<EmployeeView>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let rows = employees::table
            .order(employees::name.asc())
            .select(DbEmployee::as_select())
            .load(&mut conn)?;

        Ok(employee_views(&mut conn, rows)?)
    }

    fn list_active_employees(&self) -> RepositoryResult<Vec<DomainEmployee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let rows = employees::table
            .filter(employees::status.eq(EmployeeStatus::Active.as_str()))
            .order(employees::name.asc())
            .select(DbEmployee::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(
        &self,
        new_employee: &DomainNewEmployee,
        actor_id: i32,
    ) -> RepositoryResult<DomainEmployee> {
        let mut conn = self.conn()?;
        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            insert_employee(conn, new_employee, actor_id)
        })?;

        Ok(created.into())
    }

    fn update_employee(
        &self,
        employee_id: i32,
        updates: &DomainUpdateEmployee,
        actor_id: i32,
    ) -> RepositoryResult<DomainEmployee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let changes = DbUpdateEmployee::from(updates);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(employees::table.filter(employees::id.eq(employee_id)))
                .set(&changes)
                .returning(DbEmployee::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Employee, employee_id, AuditAction::Update)
                    .by(actor_id)
                    .details(format!("Employee #{employee_id} updated.")),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_employee(&self, employee_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::{employees, users};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(users::table.filter(users::employee_id.eq(employee_id)))
                .execute(conn)
                .map_err(still_referenced)?;

            let deleted = diesel::delete(employees::table.filter(employees::id.eq(employee_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Employee, employee_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Employee ID #{employee_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
