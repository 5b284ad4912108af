use std::collections::{HashMap, HashSet};

use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        employee::{EmployeeView, NewEmployee as DomainNewEmployee},
        user::{NewUser as DomainNewUser, UserAccount, UserCredentials},
    },
    models::{
        employee::Employee as DbEmployee,
        user::{NewUser as DbNewUser, User as DbUser},
    },
    repository::{
        DieselRepository, UserReader, UserWriter, append_audit,
        employee::{employee_views, insert_employee},
        ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

/// Load user rows together with their employee name and role name.
fn load_accounts(
    conn: &mut SqliteConnection,
    users: Vec<DbUser>,
) -> QueryResult<Vec<(DbUser, String, Option<String>)>> {
    use crate::schema::{employees, roles};

    if users.is_empty() {
        return Ok(Vec::new());
    }

    let employee_ids: Vec<i32> = users.iter().map(|user| user.employee_id).collect();
    let employees: HashMap<i32, (String, Option<String>)> = employees::table
        .left_join(roles::table)
        .filter(employees::id.eq_any(&employee_ids))
        .select((employees::id, employees::name, roles::name.nullable()))
        .load::<(i32, String, Option<String>)>(conn)?
        .into_iter()
        .map(|(id, name, role)| (id, (name, role)))
        .collect();

    Ok(users
        .into_iter()
        .map(|user| {
            let (name, role) = employees
                .get(&user.employee_id)
                .cloned()
                .unwrap_or_default();
            (user, name, role)
        })
        .collect())
}

fn into_account((user, employee_name, role_name): (DbUser, String, Option<String>)) -> UserAccount {
    UserAccount {
        id: user.id,
        username: user.username,
        employee_id: user.employee_id,
        employee_name,
        role_name,
        created_at: user.created_at,
    }
}

fn insert_user(
    conn: &mut SqliteConnection,
    new_user: &DomainNewUser,
    actor_id: i32,
) -> RepositoryResult<DbUser> {
    use crate::schema::users;

    let created = diesel::insert_into(users::table)
        .values(&DbNewUser::from(new_user))
        .returning(DbUser::as_returning())
        .get_result(conn)?;

    append_audit(
        conn,
        &NewAuditEntry::new(AuditEntity::User, created.id, AuditAction::Create)
            .by(actor_id)
            .details(format!("User account {} created", created.username)),
    )?;

    Ok(created)
}

impl DieselRepository {
    /// Create an employee together with its login account. Nothing is kept
    /// when either insert fails, e.g. on a taken username.
    pub fn create_employee_with_account(
        &self,
        new_employee: &DomainNewEmployee,
        username: &str,
        password_hash: String,
        actor_id: i32,
    ) -> RepositoryResult<UserAccount> {
        let mut conn = self.conn()?;
        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let employee = insert_employee(conn, new_employee, actor_id)?;
            let new_user = DomainNewUser::new(employee.id, username, password_hash);
            let created = insert_user(conn, &new_user, actor_id)?;
            Ok(load_accounts(conn, vec![created])?)
        })?;

        created
            .into_iter()
            .next()
            .map(into_account)
            .ok_or(RepositoryError::NotFound)
    }
}

impl UserReader for DieselRepository {
    fn get_user_credentials(&self, username: &str) -> RepositoryResult<Option<UserCredentials>> {
        use crate::schema::users;

        let normalized = username.trim().to_lowercase();

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::username.eq(&normalized))
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(user) = user else {
            return Ok(None);
        };

        let account = load_accounts(&mut conn, vec![user])?.into_iter().next();

        Ok(account.map(|(user, employee_name, role_name)| UserCredentials {
            user_id: user.id,
            username: user.username,
            password_hash: user.password_hash,
            employee_id: user.employee_id,
            employee_name,
            role_name,
        }))
    }

    fn get_user_account(&self, user_id: i32) -> RepositoryResult<Option<UserAccount>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::id.eq(user_id))
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(user) = user else {
            return Ok(None);
        };

        Ok(load_accounts(&mut conn, vec![user])?
            .into_iter()
            .next()
            .map(into_account))
    }

    fn list_user_accounts(&self) -> RepositoryResult<Vec<UserAccount>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let rows = users::table
            .order(users::username.asc())
            .select(DbUser::as_select())
            .load(&mut conn)?;

        Ok(load_accounts(&mut conn, rows)?
            .into_iter()
            .map(into_account)
            .collect())
    }

    fn list_employees_without_account(&self) -> RepositoryResult<Vec<EmployeeView>> {
        use crate::schema::{employees, users};

        let mut conn = self.conn()?;

        let with_account: HashSet<i32> = users::table
            .select(users::employee_id)
            .load::<i32>(&mut conn)?
            .into_iter()
            .collect();

        let rows: Vec<DbEmployee> = employees::table
            .order(employees::name.asc())
            .select(DbEmployee::as_select())
            .load(&mut conn)?
            .into_iter()
            .filter(|employee: &DbEmployee| !with_account.contains(&employee.id))
            .collect();

        Ok(employee_views(&mut conn, rows)?)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(
        &self,
        new_user: &DomainNewUser,
        actor_id: i32,
    ) -> RepositoryResult<UserAccount> {
        let mut conn = self.conn()?;
        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = insert_user(conn, new_user, actor_id)?;
            Ok(load_accounts(conn, vec![created])?)
        })?;

        created
            .into_iter()
            .next()
            .map(into_account)
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_user(&self, user_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(users::table.filter(users::id.eq(user_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::User, user_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("User account #{user_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
