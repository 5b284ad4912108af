use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::equipment::{EquipmentStatus, NewEquipment};
use crate::forms::{empty_string_as_none, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 64;

pub type EquipmentFormResult<T> = Result<T, EquipmentFormError>;

#[derive(Debug, Error)]
pub enum EquipmentFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("equipment name and type are required")]
    MissingField,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveEquipmentForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub equipment_id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub equipment_type: String,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location_id: Option<i32>,
}

impl SaveEquipmentForm {
    pub fn into_new_equipment(self) -> EquipmentFormResult<NewEquipment> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let equipment_type = sanitize_inline_text(&self.equipment_type);
        if name.is_empty() || equipment_type.is_empty() {
            return Err(EquipmentFormError::MissingField);
        }

        Ok(NewEquipment {
            name,
            equipment_type,
            status: self.status,
            location_id: self.location_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_location_and_status() {
        let form = SaveEquipmentForm {
            equipment_id: None,
            name: " Batching Plant  2 ".to_string(),
            equipment_type: "Batching Plant".to_string(),
            status: EquipmentStatus::OutOfService,
            location_id: Some(1),
        };

        let equipment = form.into_new_equipment().expect("valid form");

        assert_eq!(equipment.name, "Batching Plant 2");
        assert_eq!(equipment.status, EquipmentStatus::OutOfService);
        assert_eq!(equipment.location_id, Some(1));
    }
}
