use diesel::prelude::*;

use crate::domain::organization::{
    Department as DomainDepartment, Location as DomainLocation, Role as DomainRole,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::roles)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::departments)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::locations)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl From<Role> for DomainRole {
    fn from(value: Role) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

impl From<Department> for DomainDepartment {
    fn from(value: Department) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<Location> for DomainLocation {
    fn from(value: Location) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address,
        }
    }
}
