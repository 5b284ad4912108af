use diesel::prelude::*;

use crate::{
    domain::organization::{Department, Location, Role},
    models::organization::{
        Department as DbDepartment, Location as DbLocation, Role as DbRole,
    },
    repository::{DieselRepository, OrganizationReader, errors::RepositoryResult},
};

impl OrganizationReader for DieselRepository {
    fn list_roles(&self) -> RepositoryResult<Vec<Role>> {
        use crate::schema::roles;

        let mut conn = self.conn()?;
        let rows = roles::table
            .order(roles::name.asc())
            .select(DbRole::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let rows = departments::table
            .order(departments::name.asc())
            .select(DbDepartment::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_locations(&self) -> RepositoryResult<Vec<Location>> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let rows = locations::table
            .order(locations::name.asc())
            .select(DbLocation::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
