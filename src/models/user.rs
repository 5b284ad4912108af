use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::NewUser as DomainNewUser;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::users,
    belongs_to(super::employee::Employee, foreign_key = employee_id)
)]
pub struct User {
    pub id: i32,
    pub employee_id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub employee_id: i32,
    pub username: &'a str,
    pub password_hash: &'a str,
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            employee_id: value.employee_id,
            username: value.username.as_str(),
            password_hash: value.password_hash.as_str(),
        }
    }
}
