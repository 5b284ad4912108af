use crate::domain::auth::AuthenticatedUser;
use crate::domain::equipment::EquipmentView;
use crate::domain::organization::Location;
use crate::forms::equipment::SaveEquipmentForm;
use crate::repository::{EquipmentReader, EquipmentWriter, OrganizationReader};
use crate::services::{Saved, ServiceError, ServiceResult};

pub struct EquipmentPageData {
    /// Plant machinery with location names.
    pub equipment: Vec<EquipmentView>,
    /// Locations offered by the equipment form.
    pub locations: Vec<Location>,
}

pub fn load_equipment_page<R>(repo: &R) -> ServiceResult<EquipmentPageData>
where
    R: EquipmentReader + OrganizationReader + ?Sized,
{
    let equipment = repo.list_equipment().map_err(ServiceError::from)?;
    let locations = repo.list_locations().map_err(ServiceError::from)?;
    Ok(EquipmentPageData {
        equipment,
        locations,
    })
}

pub fn save_equipment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveEquipmentForm,
) -> ServiceResult<Saved>
where
    R: EquipmentWriter + ?Sized,
{
    let equipment_id = form.equipment_id;
    let payload = form
        .into_new_equipment()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match equipment_id {
        Some(equipment_id) => {
            repo.update_equipment(equipment_id, &payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_equipment(&payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

pub fn delete_equipment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    equipment_id: i32,
) -> ServiceResult<()>
where
    R: EquipmentWriter + ?Sized,
{
    repo.delete_equipment(equipment_id, user.user_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::{Equipment, EquipmentStatus};
    use crate::services::test_support::{FakeRepo, operator};

    #[test]
    fn save_with_id_updates_status() {
        let mut repo = FakeRepo::default();
        repo.equipment_writer
            .expect_update_equipment()
            .withf(|id, equipment, _| *id == 3 && equipment.status == EquipmentStatus::Maintenance)
            .times(1)
            .returning(|id, equipment, _| {
                Ok(Equipment {
                    id,
                    name: equipment.name.clone(),
                    equipment_type: equipment.equipment_type.clone(),
                    status: equipment.status,
                    location_id: equipment.location_id,
                })
            });

        let form = SaveEquipmentForm {
            equipment_id: Some(3),
            name: "Boom Pump 36m".to_string(),
            equipment_type: "Concrete Pump".to_string(),
            status: EquipmentStatus::Maintenance,
            location_id: None,
        };

        let saved = save_equipment(&repo, &operator(), form).expect("saved");

        assert_eq!(saved, Saved::Updated);
    }
}
