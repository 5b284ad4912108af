use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::equipment::EquipmentStatus;
use crate::forms::equipment::SaveEquipmentForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::equipment;

#[get("/erp/equipment")]
pub async fn show_equipment(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match equipment::load_equipment_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "equipment");
            context.insert("equipment", &data.equipment);
            context.insert("locations", &data.locations);
            context.insert("statuses", EquipmentStatus::ALL);
            render_template(&tera, "equipment/index.html", &context)
        }
        Err(err) => page_error(err, "equipment"),
    }
}

#[post("/erp/equipment")]
pub async fn save_equipment(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveEquipmentForm>,
) -> impl Responder {
    match equipment::save_equipment(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Equipment {} successfully.", saved.verb())).send();
            redirect("/erp/equipment")
        }
        Err(err) => flash_error(err, "Equipment", "/erp/equipment"),
    }
}

#[post("/erp/equipment/delete/{equipment_id}")]
pub async fn delete_equipment(
    equipment_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match equipment::delete_equipment(repo.get_ref(), &user, equipment_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Equipment deleted.").send();
            redirect("/erp/equipment")
        }
        Err(err) => flash_error(err, "Equipment", "/erp/equipment"),
    }
}
