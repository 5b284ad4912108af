use diesel::prelude::*;

use crate::domain::equipment::{Equipment as DomainEquipment, NewEquipment as DomainNewEquipment};
use crate::models::parse_label;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::equipment)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub equipment_type: String,
    pub status: String,
    pub location_id: Option<i32>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::equipment)]
#[diesel(treat_none_as_null = true)]
pub struct NewEquipment<'a> {
    pub name: &'a str,
    pub equipment_type: &'a str,
    pub status: &'a str,
    pub location_id: Option<i32>,
}

impl From<Equipment> for DomainEquipment {
    fn from(value: Equipment) -> Self {
        Self {
            id: value.id,
            name: value.name,
            equipment_type: value.equipment_type,
            status: parse_label(&value.status),
            location_id: value.location_id,
        }
    }
}

impl<'a> From<&'a DomainNewEquipment> for NewEquipment<'a> {
    fn from(value: &'a DomainNewEquipment) -> Self {
        Self {
            name: value.name.as_str(),
            equipment_type: value.equipment_type.as_str(),
            status: value.status.as_str(),
            location_id: value.location_id,
        }
    }
}
