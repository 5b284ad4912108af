use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::inventory::SaveInventoryForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::inventory;

#[get("/erp/inventory")]
pub async fn show_inventory(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match inventory::load_inventory_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "inventory");
            context.insert("items", &data.items);
            context.insert("suppliers", &data.suppliers);
            render_template(&tera, "inventory/index.html", &context)
        }
        Err(err) => page_error(err, "inventory"),
    }
}

#[post("/erp/inventory")]
pub async fn save_inventory_item(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveInventoryForm>,
) -> impl Responder {
    match inventory::save_inventory_item(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Material {} successfully.", saved.verb())).send();
            redirect("/erp/inventory")
        }
        Err(err) => flash_error(err, "Material", "/erp/inventory"),
    }
}

#[post("/erp/inventory/delete/{material_id}")]
pub async fn delete_inventory_item(
    material_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match inventory::delete_inventory_item(repo.get_ref(), &user, material_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Material deleted.").send();
            redirect("/erp/inventory")
        }
        Err(err) => flash_error(err, "Material", "/erp/inventory"),
    }
}
