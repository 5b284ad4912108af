use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::vehicle::{NewVehicle, VehicleStatus};
use crate::forms::{empty_string_as_none, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 64;
const REGISTRATION_MAX_LEN: u64 = 32;

pub type VehicleFormResult<T> = Result<T, VehicleFormError>;

#[derive(Debug, Error)]
pub enum VehicleFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("vehicle name, registration and type are required")]
    MissingField,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveVehicleForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = REGISTRATION_MAX_LEN))]
    pub registration_no: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub vehicle_type: String,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 0.0))]
    pub capacity: Option<f64>,
}

impl SaveVehicleForm {
    pub fn into_new_vehicle(self) -> VehicleFormResult<NewVehicle> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        // Plates are compared and displayed upper-case without spaces.
        let registration_no: String = self
            .registration_no
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        let vehicle_type = sanitize_inline_text(&self.vehicle_type);

        if name.is_empty() || registration_no.is_empty() || vehicle_type.is_empty() {
            return Err(VehicleFormError::MissingField);
        }

        Ok(NewVehicle {
            name,
            registration_no,
            vehicle_type,
            status: self.status,
            capacity: self.capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_registration_number() {
        let form = SaveVehicleForm {
            vehicle_id: None,
            name: "Mixer 7".to_string(),
            registration_no: "ka 01 ab 1234".to_string(),
            vehicle_type: "Transit Mixer".to_string(),
            status: VehicleStatus::InUse,
            capacity: Some(8.0),
        };

        let vehicle = form.into_new_vehicle().expect("valid form");

        assert_eq!(vehicle.registration_no, "KA01AB1234");
        assert_eq!(vehicle.status, VehicleStatus::InUse);
    }

    #[test]
    fn rejects_blank_type() {
        let form = SaveVehicleForm {
            vehicle_id: None,
            name: "Mixer 7".to_string(),
            registration_no: "KA01".to_string(),
            vehicle_type: "  ".to_string(),
            status: VehicleStatus::Available,
            capacity: None,
        };

        assert!(matches!(
            form.into_new_vehicle(),
            Err(VehicleFormError::MissingField)
        ));
    }
}
