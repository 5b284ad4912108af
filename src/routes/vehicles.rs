use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::vehicle::VehicleStatus;
use crate::forms::vehicles::SaveVehicleForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::{ServiceError, vehicles};

#[get("/erp/vehicles")]
pub async fn show_vehicles(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match vehicles::load_vehicles(repo.get_ref()) {
        Ok(vehicles) => {
            let mut context = base_context(&flash_messages, &user, "vehicles");
            context.insert("vehicles", &vehicles);
            context.insert("statuses", VehicleStatus::ALL);
            render_template(&tera, "vehicles/index.html", &context)
        }
        Err(err) => page_error(err, "vehicles"),
    }
}

#[post("/erp/vehicles")]
pub async fn save_vehicle(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveVehicleForm>,
) -> impl Responder {
    match vehicles::save_vehicle(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Vehicle {} successfully.", saved.verb())).send();
            redirect("/erp/vehicles")
        }
        Err(err) => flash_error(err, "Vehicle", "/erp/vehicles"),
    }
}

#[post("/erp/vehicles/delete/{vehicle_id}")]
pub async fn delete_vehicle(
    vehicle_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match vehicles::delete_vehicle(repo.get_ref(), &user, vehicle_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Vehicle deleted.").send();
            redirect("/erp/vehicles")
        }
        Err(ServiceError::Internal(message)) => {
            log::error!("Failed to delete vehicle: {message}");
            FlashMessage::error(format!("Error deleting vehicle: {message}")).send();
            redirect("/erp/vehicles")
        }
        Err(err) => flash_error(err, "Vehicle", "/erp/vehicles"),
    }
}
