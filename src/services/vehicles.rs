use crate::domain::auth::AuthenticatedUser;
use crate::domain::vehicle::VehicleView;
use crate::forms::vehicles::SaveVehicleForm;
use crate::repository::{VehicleReader, VehicleWriter};
use crate::services::{Saved, ServiceError, ServiceResult};

/// Fleet ordered by name with each vehicle's open job, if any.
pub fn load_vehicles<R>(repo: &R) -> ServiceResult<Vec<VehicleView>>
where
    R: VehicleReader + ?Sized,
{
    repo.list_vehicles().map_err(ServiceError::from)
}

pub fn save_vehicle<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveVehicleForm,
) -> ServiceResult<Saved>
where
    R: VehicleWriter + ?Sized,
{
    let vehicle_id = form.vehicle_id;
    let payload = form
        .into_new_vehicle()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match vehicle_id {
        Some(vehicle_id) => {
            repo.update_vehicle(vehicle_id, &payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            let vehicle = repo
                .create_vehicle(&payload, user.user_id)
                .map_err(ServiceError::from)?;
            log::info!("Vehicle {} registered", vehicle.registration_no);
            Ok(Saved::Created)
        }
    }
}

pub fn delete_vehicle<R>(repo: &R, user: &AuthenticatedUser, vehicle_id: i32) -> ServiceResult<()>
where
    R: VehicleWriter + ?Sized,
{
    repo.delete_vehicle(vehicle_id, user.user_id)
        .map_err(ServiceError::from)
}
