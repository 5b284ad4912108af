use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::products::SaveProductForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::products;

#[get("/erp/products")]
pub async fn show_products(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products::load_products(repo.get_ref()) {
        Ok(products) => {
            let mut context = base_context(&flash_messages, &user, "products");
            context.insert("products", &products);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => page_error(err, "products"),
    }
}

#[post("/erp/products")]
pub async fn save_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveProductForm>,
) -> impl Responder {
    match products::save_product(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Product {} successfully.", saved.verb())).send();
            redirect("/erp/products")
        }
        Err(err) => flash_error(err, "Product", "/erp/products"),
    }
}

#[post("/erp/products/delete/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::delete_product(repo.get_ref(), &user, product_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Product deleted.").send();
            redirect("/erp/products")
        }
        Err(err) => flash_error(err, "Product", "/erp/products"),
    }
}
