use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::procurement::{PurchaseOrderForm, SupplierForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::procurement;

#[get("/procurement/suppliers")]
pub async fn show_suppliers(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match procurement::load_suppliers(repo.get_ref()) {
        Ok(suppliers) => {
            let mut context = base_context(&flash_messages, &user, "suppliers");
            context.insert("suppliers", &suppliers);
            render_template(&tera, "procurement/suppliers.html", &context)
        }
        Err(err) => page_error(err, "suppliers"),
    }
}

#[post("/procurement/suppliers")]
pub async fn save_supplier(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SupplierForm>,
) -> impl Responder {
    match procurement::save_supplier(repo.get_ref(), form) {
        Ok(saved) => {
            FlashMessage::success(format!("Supplier {} successfully.", saved.verb())).send();
            redirect("/procurement/suppliers")
        }
        Err(err) => flash_error(err, "Supplier", "/procurement/suppliers"),
    }
}

#[post("/procurement/suppliers/delete/{supplier_id}")]
pub async fn delete_supplier(
    supplier_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match procurement::delete_supplier(repo.get_ref(), supplier_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Supplier deleted.").send();
            redirect("/procurement/suppliers")
        }
        Err(err) => flash_error(err, "Supplier", "/procurement/suppliers"),
    }
}

#[get("/procurement/orders")]
pub async fn show_purchase_orders(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match procurement::load_purchase_orders_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "purchase_orders");
            context.insert("orders", &data.orders);
            context.insert("suppliers", &data.suppliers);
            context.insert("materials", &data.materials);
            render_template(&tera, "procurement/orders.html", &context)
        }
        Err(err) => page_error(err, "purchase orders"),
    }
}

#[post("/procurement/orders")]
pub async fn create_purchase_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<PurchaseOrderForm>,
) -> impl Responder {
    match procurement::create_purchase_order(repo.get_ref(), &user, form) {
        Ok(order) => {
            FlashMessage::success(format!("Purchase order #{} placed.", order.id)).send();
            redirect("/procurement/orders")
        }
        Err(err) => flash_error(err, "Purchase order", "/procurement/orders"),
    }
}

#[post("/procurement/orders/{order_id}/receive")]
pub async fn receive_purchase_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match procurement::receive_purchase_order(repo.get_ref(), &user, order_id.into_inner()) {
        Ok(order) => {
            FlashMessage::success(format!(
                "Purchase order #{} received and stock updated.",
                order.id
            ))
            .send();
            redirect("/procurement/orders")
        }
        Err(err) => flash_error(err, "Purchase order", "/procurement/orders"),
    }
}

#[post("/procurement/orders/delete/{order_id}")]
pub async fn delete_purchase_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match procurement::delete_purchase_order(repo.get_ref(), &user, order_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Purchase order deleted.").send();
            redirect("/procurement/orders")
        }
        Err(err) => flash_error(err, "Purchase order", "/procurement/orders"),
    }
}
