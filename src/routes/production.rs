use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::production::{BatchStatus, QcResult};
use crate::forms::production::{NewBatchForm, QualityCheckForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::{ServiceError, production};

#[get("/erp/production")]
pub async fn show_batches(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match production::load_batches(repo.get_ref()) {
        Ok(batches) => {
            let mut context = base_context(&flash_messages, &user, "production");
            context.insert("batches", &batches);
            render_template(&tera, "production/index.html", &context)
        }
        Err(err) => page_error(err, "production batches"),
    }
}

#[get("/erp/production/new")]
pub async fn new_batch(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match production::load_batch_form(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "production");
            context.insert("orders", &data.orders);
            context.insert("products", &data.products);
            context.insert("locations", &data.locations);
            context.insert("statuses", BatchStatus::ALL);
            render_template(&tera, "production/form.html", &context)
        }
        Err(err) => page_error(err, "batch form"),
    }
}

#[post("/erp/production/new")]
pub async fn create_batch(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<NewBatchForm>,
) -> impl Responder {
    match production::create_batch(repo.get_ref(), &user, form) {
        Ok(batch) => {
            FlashMessage::success(format!("Batch #{} recorded.", batch.id)).send();
            redirect("/erp/production")
        }
        Err(err) => flash_error(err, "Batch", "/erp/production/new"),
    }
}

#[get("/erp/production/view/{batch_id}")]
pub async fn show_batch(
    batch_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let batch_id = batch_id.into_inner();
    match production::load_batch(repo.get_ref(), batch_id) {
        Ok(batch) => {
            let mut context = base_context(&flash_messages, &user, "production");
            context.insert("batch", &batch);
            render_template(&tera, "production/view.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Batch #{batch_id} not found.")).send();
            redirect("/erp/production")
        }
        Err(err) => page_error(err, "batch"),
    }
}

#[get("/erp/production/qc/{batch_id}")]
pub async fn show_quality_checks(
    batch_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let batch_id = batch_id.into_inner();
    match production::load_quality_page(repo.get_ref(), batch_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "production");
            context.insert("batch", &data.batch);
            context.insert("checks", &data.checks);
            context.insert("results", QcResult::ALL);
            render_template(&tera, "production/qc.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Batch #{batch_id} not found.")).send();
            redirect("/erp/production")
        }
        Err(err) => page_error(err, "quality checks"),
    }
}

#[post("/erp/production/qc/{batch_id}")]
pub async fn add_quality_check(
    batch_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<QualityCheckForm>,
) -> impl Responder {
    let batch_id = batch_id.into_inner();
    let location = format!("/erp/production/qc/{batch_id}");
    match production::add_quality_check(repo.get_ref(), &user, batch_id, form) {
        Ok(_) => {
            FlashMessage::success("Quality check recorded.").send();
            redirect(&location)
        }
        Err(err) => flash_error(err, "Batch", &location),
    }
}
