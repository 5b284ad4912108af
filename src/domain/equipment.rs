use serde::Serialize;

labeled_enum! {
    pub enum EquipmentStatus {
        Operational => "Operational",
        Maintenance => "Maintenance",
        OutOfService => "Out of Service",
    }
    default = Operational;
}

/// Plant machinery such as batching units, loaders and concrete pumps.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub equipment_type: String,
    pub status: EquipmentStatus,
    pub location_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EquipmentView {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub location_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEquipment {
    pub name: String,
    pub equipment_type: String,
    pub status: EquipmentStatus,
    pub location_id: Option<i32>,
}

pub type UpdateEquipment = NewEquipment;
