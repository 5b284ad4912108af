use serde::Serialize;

labeled_enum! {
    pub enum VehicleStatus {
        Available => "Available",
        InUse => "In Use",
        Maintenance => "Maintenance",
        OutOfService => "Out of Service",
    }
    default = Available;
}

/// Transit mixer, pump truck or tipper in the fleet.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub registration_no: String,
    pub vehicle_type: String,
    pub status: VehicleStatus,
    /// Drum or bed capacity in cubic metres.
    pub capacity: Option<f64>,
}

/// Vehicle with the open job it is currently assigned to, if any.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleView {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub current_job_id: Option<i32>,
    pub current_job_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub name: String,
    pub registration_no: String,
    pub vehicle_type: String,
    pub status: VehicleStatus,
    pub capacity: Option<f64>,
}

pub type UpdateVehicle = NewVehicle;
