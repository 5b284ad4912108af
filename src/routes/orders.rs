use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::order::OrderStatus;
use crate::forms::orders::OrderForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::{ServiceError, orders};

#[get("/erp/orders")]
pub async fn show_orders(
    params: web::Query<orders::OrdersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match orders::load_orders_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "orders");
            context.insert("orders", &data.orders);
            context.insert("search", &data.search);
            context.insert("status", &data.status);
            context.insert("statuses", OrderStatus::ALL);
            render_template(&tera, "orders/index.html", &context)
        }
        Err(err) => page_error(err, "orders"),
    }
}

#[get("/erp/orders/new")]
pub async fn new_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match orders::load_order_form(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "orders");
            context.insert("customers", &data.customers);
            context.insert("products", &data.products);
            context.insert("statuses", OrderStatus::ALL);
            render_template(&tera, "orders/form.html", &context)
        }
        Err(err) => page_error(err, "order form"),
    }
}

#[post("/erp/orders/new")]
pub async fn create_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<OrderForm>,
) -> impl Responder {
    match orders::create_order(repo.get_ref(), &user, form) {
        Ok(order) => {
            FlashMessage::success(format!("Order #{} created successfully.", order.id)).send();
            redirect("/erp/orders")
        }
        Err(err) => flash_error(err, "Order", "/erp/orders/new"),
    }
}

#[get("/erp/orders/{order_id}")]
pub async fn show_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match orders::load_order(repo.get_ref(), order_id.into_inner()) {
        Ok(details) => {
            let mut context = base_context(&flash_messages, &user, "orders");
            context.insert("order", &details);
            render_template(&tera, "orders/view.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Order not found!").send();
            redirect("/erp/orders")
        }
        Err(err) => page_error(err, "order"),
    }
}

#[get("/erp/orders/edit/{order_id}")]
pub async fn edit_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match orders::load_order_edit(repo.get_ref(), order_id.into_inner()) {
        Ok((order, data)) => {
            let mut context = base_context(&flash_messages, &user, "orders");
            context.insert("order", &order);
            context.insert("customers", &data.customers);
            context.insert("products", &data.products);
            context.insert("statuses", OrderStatus::ALL);
            render_template(&tera, "orders/form.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Order not found!").send();
            redirect("/erp/orders")
        }
        Err(err) => page_error(err, "order"),
    }
}

#[post("/erp/orders/edit/{order_id}")]
pub async fn update_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<OrderForm>,
) -> impl Responder {
    let order_id = order_id.into_inner();
    match orders::update_order(repo.get_ref(), &user, order_id, form) {
        Ok(order) => {
            FlashMessage::success(format!("Order #{} updated.", order.id)).send();
            redirect(&format!("/erp/orders/{order_id}"))
        }
        Err(err) => flash_error(err, "Order", &format!("/erp/orders/edit/{order_id}")),
    }
}

#[post("/erp/orders/delete/{order_id}")]
pub async fn delete_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let order_id = order_id.into_inner();
    match orders::delete_order(repo.get_ref(), &user, order_id) {
        Ok(()) => {
            FlashMessage::success(format!("Order #{order_id} deleted.")).send();
            redirect("/erp/orders")
        }
        Err(err) => flash_error(err, "Order", "/erp/orders"),
    }
}
