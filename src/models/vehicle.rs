use diesel::prelude::*;

use crate::domain::vehicle::{NewVehicle as DomainNewVehicle, Vehicle as DomainVehicle};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vehicles)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub registration_no: String,
    pub vehicle_type: String,
    pub status: String,
    pub capacity: Option<f64>,
}

/// Used for both inserts and full-row updates.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::vehicles)]
#[diesel(treat_none_as_null = true)]
pub struct NewVehicle<'a> {
    pub name: &'a str,
    pub registration_no: &'a str,
    pub vehicle_type: &'a str,
    pub status: &'a str,
    pub capacity: Option<f64>,
}

impl From<Vehicle> for DomainVehicle {
    fn from(value: Vehicle) -> Self {
        Self {
            id: value.id,
            name: value.name,
            registration_no: value.registration_no,
            vehicle_type: value.vehicle_type,
            status: parse_label(&value.status),
            capacity: value.capacity,
        }
    }
}

impl<'a> From<&'a DomainNewVehicle> for NewVehicle<'a> {
    fn from(value: &'a DomainNewVehicle) -> Self {
        Self {
            name: value.name.as_str(),
            registration_no: value.registration_no.as_str(),
            vehicle_type: value.vehicle_type.as_str(),
            status: value.status.as_str(),
            capacity: value.capacity,
        }
    }
}
