use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::employees)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role_id: Option<i32>,
    pub department_id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_joining: NaiveDate,
    pub status: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub role_id: Option<i32>,
    pub department_id: Option<i32>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub date_of_joining: NaiveDate,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateEmployee<'a> {
    pub name: &'a str,
    pub role_id: Option<i32>,
    pub department_id: Option<i32>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub status: &'a str,
}

impl From<Employee> for DomainEmployee {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id,
            name: value.name,
            role_id: value.role_id,
            department_id: value.department_id,
            phone: value.phone,
            email: value.email,
            date_of_joining: value.date_of_joining,
            status: parse_label(&value.status),
        }
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(value: &'a DomainNewEmployee) -> Self {
        Self {
            name: value.name.as_str(),
            role_id: value.role_id,
            department_id: value.department_id,
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            date_of_joining: value.date_of_joining,
            status: value.status.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateEmployee> for UpdateEmployee<'a> {
    fn from(value: &'a DomainUpdateEmployee) -> Self {
        Self {
            name: value.name.as_str(),
            role_id: value.role_id,
            department_id: value.department_id,
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            status: value.status.as_str(),
        }
    }
}
